//! Recursive Directory Purge
//!
//! Deletes the files of a directory subtree, optionally removing the emptied
//! subdirectories and optionally sparing web server artifacts.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Filenames spared when `preserve_web_artifacts` is set (case-insensitive).
const WEB_ARTIFACTS: [&str; 5] = [
    ".htaccess",
    "index.html",
    "index.htm",
    "index.php",
    "web.config",
];

// == Purge Options ==
/// Controls what `purge` removes besides plain files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeOptions {
    /// Remove each subdirectory after emptying it (never the root)
    pub delete_dirs: bool,
    /// Keep `.htaccess`, `index.{html,htm,php}` and `web.config`
    pub preserve_web_artifacts: bool,
}

// == Purge ==
/// Purges the subtree rooted at `path`.
///
/// Directories whose name starts with `.` are not descended into. Per-file
/// removal failures are ignored.
///
/// # Returns
/// - `false` if `path` cannot be read as a directory
/// - the result of removing a subdirectory when `delete_dirs` is set
/// - `true` otherwise (the root itself is never removed)
pub fn purge(path: &Path, options: PurgeOptions) -> bool {
    purge_level(path, options, 0)
}

fn purge_level(path: &Path, options: PurgeOptions, depth: usize) -> bool {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Cannot open directory for purge");
            return false;
        }
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let entry_path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir && !name.starts_with('.') {
            purge_level(&entry_path, options, depth + 1);
        } else if !options.preserve_web_artifacts || !is_web_artifact(&name) {
            if let Err(e) = fs::remove_file(&entry_path) {
                debug!(path = %entry_path.display(), error = %e, "Skipping undeletable entry");
            }
        }
    }

    if options.delete_dirs && depth > 0 {
        fs::remove_dir(path).is_ok()
    } else {
        true
    }
}

fn is_web_artifact(name: &str) -> bool {
    WEB_ARTIFACTS
        .iter()
        .any(|artifact| artifact.eq_ignore_ascii_case(name))
}
