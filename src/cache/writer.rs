//! Locked Entry Writer
//!
//! Writes entry files under an exclusive advisory lock so concurrent writers
//! to the same key serialize instead of interleaving bytes. Readers do not
//! take the lock.

use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use tracing::trace;

use crate::error::Result;

// == Write Locked ==
/// Replaces the contents of `path` with `data` while holding an exclusive lock.
///
/// The file is created if missing but not truncated on open: truncation
/// happens only after the lock is held, otherwise a second writer could wipe
/// bytes the lock holder is still writing.
pub fn write_locked(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    file.lock()?;
    trace!(path = %path.display(), len = data.len(), "Acquired entry write lock");

    // Dropping the handle on an error path closes the descriptor, which
    // releases the lock as well.
    file.set_len(0)?;
    write_fully(&mut file, data)?;
    file.flush()?;

    file.unlock()?;
    Ok(())
}

// == Write Fully ==
/// Writes all of `data`, retrying short writes until every byte is written.
///
/// Interrupted writes are retried; a write that accepts zero bytes is an
/// error. Returns the number of bytes written.
pub fn write_fully<W: Write>(writer: &mut W, data: &[u8]) -> io::Result<usize> {
    let mut written = 0;

    while written < data.len() {
        match writer.write(&data[written..]) {
            Ok(0) => {
                return Err(io::Error::new(
                    ErrorKind::WriteZero,
                    format!("wrote {} of {} bytes", written, data.len()),
                ))
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(written)
}
