use crate::error::Result;
use std::path::Path;

/// Trait for materializing templates from different backing stores.
pub trait TemplateSource {
    /// Writes the named template's file tree into the target directory.
    ///
    /// The target must already have passed validation; this call may create
    /// the directory itself and any parents its entries need.
    ///
    /// # Returns
    /// * `Result<()>` - Success once every entry has been written
    fn materialize(&self, template: &str, target_dir: &Path) -> Result<()>;
}
