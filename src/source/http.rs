use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};
use crate::ioutils::create_dir_all;
use crate::source::interface::TemplateSource;
use crate::unzip;
use std::fs;
use std::path::Path;
use url::Url;

/// Materializer backed by packaged archives served under the engine's
/// remote origin.
pub struct HttpSource {
    origin: Url,
}

impl HttpSource {
    /// Creates a new HttpSource for the given origin URL.
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    /// Derives the archive URL by replacing the origin's trailing path
    /// segment with `templates/<name>.zip`.
    fn archive_url(&self, template: &str) -> Result<Url> {
        let url = self.origin.join(&format!("{TEMPLATES_DIR}/{template}.zip"))?;
        Ok(url)
    }
}

impl TemplateSource for HttpSource {
    /// Downloads and unpacks the template archive into the target.
    ///
    /// The archive is written to `target/<template>.zip`, extracted in
    /// place, and removed afterwards whatever the extraction outcome;
    /// a failed removal is logged, not fatal. The steps are strictly
    /// sequential and there is no engine-level timeout on the fetch.
    fn materialize(&self, template: &str, target_dir: &Path) -> Result<()> {
        let url = self.archive_url(template)?;
        log::info!("Downloading template archive from '{url}'");

        let client = reqwest::blocking::Client::new();
        let mut response = client.get(url.clone()).send()?;
        if !response.status().is_success() {
            return Err(Error::DownloadFailed {
                url: url.to_string(),
                status: response.status(),
            });
        }

        create_dir_all(target_dir)?;
        let archive_path = target_dir.join(format!("{template}.zip"));
        let mut archive_file = fs::File::create(&archive_path)?;
        response.copy_to(&mut archive_file)?;
        drop(archive_file);

        log::debug!("Unpacking '{}'", archive_path.display());
        let extracted = unzip::extract(&archive_path, target_dir);

        if let Err(e) = fs::remove_file(&archive_path) {
            log::warn!(
                "Failed to remove temporary archive '{}': {e}",
                archive_path.display()
            );
        }

        extracted
    }
}
