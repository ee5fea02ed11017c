use crate::constants::ORIGIN_ENV_VAR;
use crate::error::Result;
use std::path::PathBuf;
use url::Url;

/// Where the engine's own code is running from.
///
/// Computed once per invocation and passed down explicitly; it is the sole
/// signal selecting the materialization strategy.
#[derive(Debug, Clone)]
pub enum ExecutionContext {
    /// Engine runs from the local filesystem; templates come from the
    /// adjacent store directory.
    Local(PathBuf),
    /// Engine was delivered from a remote origin; templates come as
    /// packaged archives under the same origin.
    Remote(Url),
}

impl std::fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionContext::Local(path) => {
                write!(f, "local store: '{}'", path.display())
            }
            ExecutionContext::Remote(url) => write!(f, "remote origin: '{url}'"),
        }
    }
}

/// Captures the engine origin once at startup.
///
/// The `STENCIL_ORIGIN` environment variable takes precedence; remote
/// deployments set it to the URL they were delivered from. Without it the
/// origin is the directory containing the running executable.
///
/// # Returns
/// * `Result<ExecutionContext>` - The captured execution context
pub fn resolve() -> Result<ExecutionContext> {
    match std::env::var(ORIGIN_ENV_VAR) {
        Ok(raw) => Ok(classify(&raw)),
        Err(_) => {
            let exe = std::env::current_exe()?;
            let dir = exe.parent().map(PathBuf::from).unwrap_or_default();
            Ok(ExecutionContext::Local(dir))
        }
    }
}

/// Classifies an origin identifier as local or remote.
///
/// Supports:
/// - HTTP(S) URLs: https://example.com/stencil -> Remote
/// - File URLs: file:///opt/stencil -> Local(/opt/stencil)
/// - Plain paths: /opt/stencil, ./stencil, C:\stencil -> Local
pub fn classify(raw: &str) -> ExecutionContext {
    if let Ok(url) = Url::parse(raw) {
        match url.scheme() {
            "http" | "https" => return ExecutionContext::Remote(url),
            "file" => {
                if let Ok(path) = url.to_file_path() {
                    return ExecutionContext::Local(path);
                }
            }
            // Windows drive letters parse as single-letter schemes
            _ => {}
        }
    }
    ExecutionContext::Local(PathBuf::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_remote(raw: &str) -> bool {
        matches!(classify(raw), ExecutionContext::Remote(_))
    }

    #[test]
    fn test_classify_http() {
        assert!(is_remote("http://localhost:3000/stencil"));
        assert!(is_remote("http://192.168.1.1/tools/stencil"));
    }

    #[test]
    fn test_classify_https() {
        assert!(is_remote("https://example.com/stencil"));
        assert!(is_remote("https://example.com/deep/path/stencil"));
    }

    #[test]
    fn test_classify_file_url() {
        match classify("file:///opt/stencil") {
            ExecutionContext::Local(path) => {
                assert_eq!(path, PathBuf::from("/opt/stencil"));
            }
            other => panic!("expected Local, got {other}"),
        }
    }

    #[test]
    fn test_classify_local_paths() {
        assert!(!is_remote("/opt/stencil"));
        assert!(!is_remote("./relative/path"));
        assert!(!is_remote("../parent/path"));
        assert!(!is_remote("stencil"));
        assert!(!is_remote("C:\\Program Files\\stencil"));
    }

    #[test]
    fn test_classify_other_schemes_are_local() {
        // Only http(s) selects the remote strategy; everything else is
        // treated as a filesystem path.
        assert!(!is_remote("ftp://example.com/stencil"));
        assert!(!is_remote("git@github.com:user/repo"));
    }

    #[test]
    fn test_display() {
        let local = ExecutionContext::Local(PathBuf::from("/opt/stencil"));
        assert_eq!(format!("{local}"), "local store: '/opt/stencil'");

        let remote =
            ExecutionContext::Remote(Url::parse("https://example.com/stencil").unwrap());
        assert_eq!(format!("{remote}"), "remote origin: 'https://example.com/stencil'");
    }
}
