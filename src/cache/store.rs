//! File Cache Store Module
//!
//! Main cache engine: one file per key under a root directory, with TTL
//! expiration enforced lazily on read.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::key::validate_key;
use crate::cache::purge::{purge, PurgeOptions};
use crate::cache::writer::write_locked;
#[cfg(unix)]
use crate::cache::ENTRY_FILE_MODE;
use crate::cache::{CacheEntry, DEFAULT_TTL_SECONDS};
use crate::error::{CacheError, Result};

// == File Cache ==
/// Key/value cache persisted as one file per key.
///
/// Every operation reports expected failures (miss, expiry, corruption,
/// write errors) through `Option` / `bool` and never panics, so a failing
/// cache degrades to "nothing was cached".
#[derive(Debug, Clone)]
pub struct FileCache {
    /// Directory holding the entry files
    root: PathBuf,
    /// TTL in seconds used when `save` is given `None`
    default_ttl: i64,
}

impl FileCache {
    // == Constructor ==
    /// Opens a cache rooted at an existing directory.
    ///
    /// # Errors
    /// `CacheError::InvalidRoot` if `root` is not a directory. A misconfigured
    /// root is a deployment error; callers are expected to abort on it.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CacheError::InvalidRoot(root));
        }

        Ok(Self {
            root,
            default_ttl: DEFAULT_TTL_SECONDS,
        })
    }

    /// Replaces the TTL used by `save` when none is given.
    pub fn with_default_ttl(mut self, ttl_seconds: i64) -> Self {
        self.default_ttl = ttl_seconds;
        self
    }

    /// Returns the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the TTL used when `save` is given `None`.
    pub fn default_ttl(&self) -> i64 {
        self.default_ttl
    }

    /// Returns the backing file path of `key`, or an error for invalid keys.
    pub fn entry_path(&self, key: &str) -> Result<PathBuf> {
        Ok(self.root.join(validate_key(key)?))
    }

    // == Get ==
    /// Retrieves the payload stored under `key`.
    ///
    /// Missing, unreadable, corrupt and expired entries all yield `None`.
    /// An expired entry's file is removed before returning.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.read_entry(key) {
            Ok(Some(entry)) => {
                debug!(key, "Cache hit");
                Some(entry.payload)
            }
            Ok(None) => {
                debug!(key, "Cache miss");
                None
            }
            Err(e) => {
                debug!(key, error = %e, "Cache miss on unreadable entry");
                None
            }
        }
    }

    fn read_entry(&self, key: &str) -> Result<Option<CacheEntry>> {
        let path = self.entry_path(key)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entry = CacheEntry::decode(&bytes)?;
        if entry.is_expired() {
            debug!(
                key,
                created_at = entry.created_at,
                ttl_seconds = entry.ttl_seconds,
                "Cache entry expired"
            );
            if let Err(e) = fs::remove_file(&path) {
                debug!(key, error = %e, "Failed to remove expired cache entry");
            }
            return Ok(None);
        }

        Ok(Some(entry))
    }

    // == Save ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// # Arguments
    /// * `key` - The key to store; `/` separates directory levels
    /// * `value` - The encoded value
    /// * `ttl_seconds` - Lifetime in seconds (uses the default TTL if None,
    ///   `<= 0` never expires)
    ///
    /// # Returns
    /// `true` once the entry is fully written, `false` on any failure.
    pub fn save(&self, key: &str, value: &[u8], ttl_seconds: Option<i64>) -> bool {
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);
        match self.write_entry(key, value, ttl) {
            Ok(()) => {
                debug!(key, ttl, len = value.len(), "Cached entry");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to save cache entry");
                false
            }
        }
    }

    fn write_entry(&self, key: &str, value: &[u8], ttl_seconds: i64) -> Result<()> {
        let relative = validate_key(key)?;
        create_parent_dirs(&self.root, &relative)?;
        let path = self.root.join(relative);

        let entry = CacheEntry::new(value.to_vec(), ttl_seconds);
        write_locked(&path, &entry.encode()?)
            .map_err(|e| CacheError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        if let Err(e) = restrict_permissions(&path) {
            warn!(path = %path.display(), error = %e, "Failed to set entry permissions");
        }
        Ok(())
    }

    // == Delete ==
    /// Removes the entry stored under `key`.
    ///
    /// Returns `false` when there is nothing to remove, so "already gone" and
    /// "failed" are indistinguishable by design.
    pub fn delete(&self, key: &str) -> bool {
        let Ok(path) = self.entry_path(key) else {
            return false;
        };

        if !path.exists() {
            return false;
        }

        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) => {
                debug!(key, error = %e, "Failed to delete cache entry");
                false
            }
        }
    }

    // == Clean ==
    /// Removes every entry file under the root, at any depth.
    ///
    /// No file is spared, hidden or not. Directories stay in place.
    pub fn clean(&self) -> bool {
        purge(&self.root, PurgeOptions::default())
    }

    // == Typed Values ==
    /// Stores a serializable value as JSON.
    pub fn save_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: Option<i64>,
    ) -> bool {
        match serde_json::to_vec(value) {
            Ok(bytes) => self.save(key, &bytes, ttl_seconds),
            Err(e) => {
                warn!(key, error = %e, "Failed to encode cache value");
                false
            }
        }
    }

    /// Retrieves a value stored with `save_json`. A payload that does not
    /// decode as `T` is a miss.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = self.get(key)?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "Cached value does not decode");
                None
            }
        }
    }
}

/// Creates the directories between `root` and a nested key's file.
///
/// The root itself is never recreated, so a vanished root fails the save.
fn create_parent_dirs(root: &Path, relative: &Path) -> std::io::Result<()> {
    let Some(parent) = relative.parent() else {
        return Ok(());
    };

    let mut dir = root.to_path_buf();
    for component in parent.components() {
        dir.push(component);
        match fs::create_dir(&dir) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && dir.is_dir() => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(ENTRY_FILE_MODE))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
