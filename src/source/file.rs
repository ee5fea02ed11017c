use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};
use crate::ioutils::{copy_file, create_dir_all};
use crate::manifest;
use crate::source::interface::TemplateSource;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Materializer backed by a template store on the local filesystem.
pub struct FileSource {
    store_root: PathBuf,
}

impl FileSource {
    /// Creates a new FileSource over the given store root.
    pub fn new(store_root: PathBuf) -> Self {
        Self { store_root }
    }

    fn template_root(&self, template: &str) -> PathBuf {
        self.store_root.join(TEMPLATES_DIR).join(template)
    }

    /// Copies one manifest entry into the target.
    ///
    /// Directory entries are created empty; file entries are copied
    /// byte-for-byte with parents created as needed.
    fn materialize_entry(
        template_root: &Path,
        target_dir: &Path,
        entry: &str,
    ) -> Result<()> {
        let source_path = template_root.join(entry);
        let dest_path = target_dir.join(manifest::destination_entry(entry));

        log::debug!("Copying '{}' to '{}'", source_path.display(), dest_path.display());

        if source_path.is_dir() {
            create_dir_all(&dest_path)
        } else {
            copy_file(&source_path, &dest_path)
        }
        .map_err(|e| Error::ProvisioningFailed {
            source_path: source_path.display().to_string(),
            e: e.to_string(),
        })
    }
}

impl TemplateSource for FileSource {
    /// Copies every manifest-listed entry from the store into the target.
    ///
    /// Entries are independent, so the copies fan out over a parallel
    /// iterator and join before success is reported; the first failure
    /// aborts the join. Partially written targets are not rolled back.
    fn materialize(&self, template: &str, target_dir: &Path) -> Result<()> {
        let template_root = self.template_root(template);
        let entries = manifest::load(template, &template_root)?;
        create_dir_all(target_dir)?;

        log::info!(
            "Provisioning template '{}' from '{}' ({} entries)",
            template,
            template_root.display(),
            entries.len()
        );

        entries.par_iter().try_for_each(|entry| {
            Self::materialize_entry(&template_root, target_dir, entry)
        })
    }
}
