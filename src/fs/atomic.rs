//! Atomic file writes.
//!
//! The generated source is rendered completely in memory and then written
//! through a temporary file:
//! 1. Write content to `.{filename}.tmp` in the same directory
//! 2. Set permissions (`0644` on Unix) and sync the file to disk
//! 3. Rename it over the target
//!
//! When the target is a symlink the write goes to the file it points at, and
//! an existing file keeps its permission bits. Ownership is not carried over.
//!
//! A failed write therefore never leaves a truncated output file behind.
//! Source and destination are in the same directory, so the rename stays on
//! one filesystem.

use crate::error::{GenerateError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Permission bits for generated files: owner read/write, everyone else read.
#[cfg(unix)]
pub const OUTPUT_MODE: u32 = 0o644;

/// Symlinks followed before a target is treated as a loop.
const MAX_SYMLINK_HOPS: usize = 40;

/// Atomically write bytes to a file, creating or replacing it.
///
/// Missing parent directories are created.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let requested = path.as_ref();
    let path = &resolve_target(requested).map_err(|e| GenerateError::write(requested, e))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| GenerateError::write(requested, e))?;
    }

    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content, existing).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GenerateError::write(requested, e)
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GenerateError::write(requested, e)
    })?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// The file a write to `path` should land in.
///
/// Symlinks are followed, including dangling ones, so the link itself is
/// never replaced. Any other path is returned as is.
fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    let mut target = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&target) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&target)?;
                target = match target.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                };
            }
            Ok(_) => return Ok(target),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(target),
            Err(e) => return Err(e),
        }
    }
    Err(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        "too many levels of symbolic links",
    ))
}

/// Temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            GenerateError::write(
                target,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file path"),
            )
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(
    path: &Path,
    content: &[u8],
    existing: Option<fs::Permissions>,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    match existing {
        Some(permissions) => file.set_permissions(permissions)?,
        None => set_output_permissions(&file)?,
    }
    file.sync_all()
}

#[cfg(unix)]
fn set_output_permissions(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(OUTPUT_MODE))
}

#[cfg(not(unix))]
fn set_output_permissions(_file: &File) -> std::io::Result<()> {
    Ok(())
}
