use crate::error::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Unpacks a zip archive into `dest_dir`, overwriting existing entries.
///
/// Entry names that would escape the destination are skipped. Unix entry
/// permissions are applied where the archive carries them.
pub fn extract(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    log::debug!(
        "Extracting {} entries into '{}'",
        archive.len(),
        dest_dir.display()
    );

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(relative_path) = entry.enclosed_name() else {
            log::warn!("Skipping archive entry with unsafe name: '{}'", entry.name());
            continue;
        };
        let dest_path = dest_dir.join(relative_path);

        if entry.is_dir() {
            fs::create_dir_all(&dest_path)?;
            continue;
        }

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut dest_file = fs::File::create(&dest_path)?;
        io::copy(&mut entry, &mut dest_file)?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&dest_path, fs::Permissions::from_mode(mode))?;
        }
    }

    Ok(())
}
