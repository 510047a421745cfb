//! Key Validation Module
//!
//! Maps cache keys onto paths relative to the cache root.
//!
//! Keys are hierarchical: `/` separates segments and each segment becomes a
//! directory level. Segments that could escape the root or hide an entry from
//! the purge walk are rejected.

use std::path::PathBuf;

use crate::cache::MAX_KEY_LENGTH;
use crate::error::{CacheError, Result};

// == Validate Key ==
/// Validates a key and returns its path relative to the cache root.
///
/// # Rejected keys
/// - empty, or longer than `MAX_KEY_LENGTH` bytes
/// - containing NUL or `\`
/// - leading, trailing or doubled `/`
/// - any segment starting with `.` (covers `.` and `..`)
pub fn validate_key(key: &str) -> Result<PathBuf> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("key cannot be empty".to_string()));
    }

    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }

    if key.contains('\0') || key.contains('\\') {
        return Err(CacheError::InvalidKey(format!(
            "key '{}' contains a forbidden character",
            key.escape_default()
        )));
    }

    let mut path = PathBuf::new();
    for segment in key.split('/') {
        if segment.is_empty() {
            return Err(CacheError::InvalidKey(format!(
                "key '{}' has an empty segment",
                key
            )));
        }
        if segment.starts_with('.') {
            return Err(CacheError::InvalidKey(format!(
                "key '{}' has a dot segment",
                key
            )));
        }
        path.push(segment);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flat_key() {
        assert_eq!(validate_key("user_42").unwrap(), Path::new("user_42"));
    }

    #[test]
    fn test_nested_key() {
        assert_eq!(
            validate_key("pages/home/v2").unwrap(),
            Path::new("pages").join("home").join("v2")
        );
    }

    #[test]
    fn test_key_with_inner_dot_is_allowed() {
        assert!(validate_key("report.json").is_ok());
        assert!(validate_key("a/b.c").is_ok());
    }

    #[test]
    fn test_rejects_traversal() {
        for key in ["..", "../etc/passwd", "a/../b", "a/..", "./a", ".hidden", "a/.git/x"] {
            assert!(
                matches!(validate_key(key), Err(CacheError::InvalidKey(_))),
                "{} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_rejects_bad_separators() {
        for key in ["/abs", "trailing/", "a//b", "win\\path"] {
            assert!(validate_key(key).is_err(), "{} should be rejected", key);
        }
    }

    #[test]
    fn test_rejects_empty_and_nul() {
        assert!(validate_key("").is_err());
        assert!(validate_key("a\0b").is_err());
    }

    #[test]
    fn test_key_length_limit() {
        assert!(validate_key(&"k".repeat(MAX_KEY_LENGTH)).is_ok());
        assert!(validate_key(&"k".repeat(MAX_KEY_LENGTH + 1)).is_err());
    }
}
