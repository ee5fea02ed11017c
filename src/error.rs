use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed. Original error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to unpack template archive. Original error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Invalid URL. Original error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Cannot proceed: no manifest found for template '{template}' in '{template_dir}'.")]
    ManifestNotFound { template: String, template_dir: String },

    #[error("Cannot proceed: target directory '{target_dir}' is not empty.")]
    TargetNotEmpty { target_dir: String },

    #[error("Cannot proceed: target path '{target_dir}' exists and is not a directory.")]
    TargetNotDirectory { target_dir: String },

    #[error("Failed to download '{url}': server responded with {status}.")]
    DownloadFailed { url: String, status: reqwest::StatusCode },

    #[error("Cannot provision '{source_path}'. Original error: {e}")]
    ProvisioningFailed { source_path: String, e: String },

    /// When a post-provision build command has executed but finished with an error.
    #[error("Build command '{command}' failed with status: {status}")]
    BuildCommandFailed { command: String, status: ExitStatus },
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
