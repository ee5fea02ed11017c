//! Constants used throughout the Stencil application

/// Per-template manifest file name
pub const MANIFEST_FILE: &str = "MANIFEST";

/// Directory under the store root (or remote origin) that holds templates
pub const TEMPLATES_DIR: &str = "templates";

/// Template provisioned when no --template flag is given
pub const DEFAULT_TEMPLATE: &str = "server";

/// Trailing marker on store-side files.
///
/// Files are stored with this suffix so language tooling scanning the store
/// never treats template payloads as importable modules. The suffix is
/// stripped when computing the destination path.
pub const STORE_FILE_SUFFIX: &str = "_";

/// Environment variable carrying the engine origin for remote deployments
pub const ORIGIN_ENV_VAR: &str = "STENCIL_ORIGIN";

/// Dependency-install command run by the post-provision build trigger
pub const INSTALL_COMMAND: &[&str] = &["npm", "install"];

/// Build command run by the post-provision build trigger
pub const BUILD_COMMAND: &[&str] = &["npm", "run", "build"];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
