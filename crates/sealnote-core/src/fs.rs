//! Filesystem utilities for atomic slot replacement.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `destination` with `contents` so readers see either the old or the
/// new value, never a partial write.
///
/// The data is written to a uniquely named temp file in the same directory,
/// flushed to disk, and then renamed over the destination. Concurrent callers
/// never share a temp file, so the last rename wins. Missing parent
/// directories are created.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    // NamedTempFile creates the file with mode 0600 on Unix.
    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;

    let temp_path = temp.into_temp_path();
    rename_with_fallback(&temp_path, destination)?;
    // Already renamed away; stop the guard from touching the path.
    let _ = temp_path.keep();
    Ok(())
}

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
/// The destination is left untouched when the source itself is missing.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        if !temp_path.exists() {
            return Err(initial_err);
        }
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
