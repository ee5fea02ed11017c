use crate::constants::{MANIFEST_FILE, STORE_FILE_SUFFIX};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Reads the manifest of the template rooted at `template_root`.
///
/// The manifest lists one relative path per line; lines are trimmed, blank
/// lines are dropped, order is preserved. Listed paths are not checked for
/// existence here; a missing store file surfaces when the copy runs.
///
/// # Returns
/// * `Result<Vec<String>>` - The ordered manifest entries
///
/// # Errors
/// * `Error::ManifestNotFound` if the template has no manifest
pub fn load(template: &str, template_root: &Path) -> Result<Vec<String>> {
    let manifest_path = template_root.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        return Err(Error::ManifestNotFound {
            template: template.to_string(),
            template_dir: template_root.display().to_string(),
        });
    }
    let content = fs::read_to_string(&manifest_path)?;
    Ok(parse(&content))
}

/// Splits manifest text into its entries.
pub fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Returns the destination-side form of a manifest entry.
///
/// Store files carry a trailing `_` so tooling never picks them up as
/// modules; the destination drops it.
pub fn destination_entry(entry: &str) -> &str {
    entry.strip_suffix(STORE_FILE_SUFFIX).unwrap_or(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_trims_and_drops_blank_lines() {
        let content = "src/Main.purs_\n\n  package.json_  \n\n";
        assert_eq!(parse(content), vec!["src/Main.purs_", "package.json_"]);
    }

    #[test]
    fn test_parse_preserves_order() {
        let content = "b.txt\na.txt\nc.txt\n";
        assert_eq!(parse(content), vec!["b.txt", "a.txt", "c.txt"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n").is_empty());
    }

    #[test]
    fn test_load_missing_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let result = load("server", temp_dir.path());
        assert!(matches!(result, Err(Error::ManifestNotFound { .. })));
    }

    #[test]
    fn test_load_reads_entries() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(MANIFEST_FILE),
            "src/Main.purs_\npackage.json_\n",
        )
        .unwrap();
        let entries = load("server", temp_dir.path()).unwrap();
        assert_eq!(entries, vec!["src/Main.purs_", "package.json_"]);
    }

    #[test]
    fn test_destination_entry_strips_store_suffix() {
        assert_eq!(destination_entry("package.json_"), "package.json");
        assert_eq!(destination_entry("src/Main.purs_"), "src/Main.purs");
        assert_eq!(destination_entry("README.md"), "README.md");
    }
}
