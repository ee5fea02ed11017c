use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Verifies the target path is safe to provision into.
///
/// The path must not exist, or exist as an empty directory. Relative paths
/// are resolved against the invocation's working directory. This check is
/// read-only and must run before any write path.
///
/// # Returns
/// * `Result<PathBuf>` - The resolved target directory
///
/// # Errors
/// * `Error::TargetNotEmpty` if the directory has any entry
/// * `Error::TargetNotDirectory` if the path exists and is not a directory
pub fn ensure_provisionable<P: AsRef<Path>>(target_dir: P) -> Result<PathBuf> {
    let target_dir = target_dir.as_ref();
    let target_dir = if target_dir.is_absolute() {
        target_dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(target_dir)
    };

    match fs::metadata(&target_dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(target_dir),
        Err(e) => Err(Error::IoError(e)),
        Ok(metadata) if metadata.is_dir() => {
            if fs::read_dir(&target_dir)?.next().is_some() {
                Err(Error::TargetNotEmpty {
                    target_dir: target_dir.display().to_string(),
                })
            } else {
                Ok(target_dir)
            }
        }
        Ok(_) => {
            Err(Error::TargetNotDirectory { target_dir: target_dir.display().to_string() })
        }
    }
}
