//! Cache Module
//!
//! Provides file-system-backed caching with lazy TTL expiration.

mod entry;
mod key;
pub mod purge;
mod store;
mod writer;


// Re-export public types
pub use entry::{current_timestamp, CacheEntry};
pub use key::validate_key;
pub use purge::{purge, PurgeOptions};
pub use store::FileCache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// TTL applied by `FileCache::save` when none is given
pub const DEFAULT_TTL_SECONDS: i64 = 60;

/// Permission bits applied to every written entry file (`rw-r-----`)
pub const ENTRY_FILE_MODE: u32 = 0o640;
