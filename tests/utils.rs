use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Store-side entries (suffixed) with their contents, shared by the local
/// and remote fixtures so cross-strategy comparisons are meaningful.
pub const SERVER_ENTRIES: &[(&str, &str)] = &[
    ("src/Main.purs_", "module Main where\n"),
    ("package.json_", "{\n  \"name\": \"new-project\"\n}\n"),
];

/// The same entries as they should appear in a provisioned target.
pub const SERVER_FILES: &[(&str, &str)] = &[
    ("src/Main.purs", "module Main where\n"),
    ("package.json", "{\n  \"name\": \"new-project\"\n}\n"),
];

/// Writes a template store rooted at `store_root` containing one template.
pub fn write_store(store_root: &Path, template: &str, entries: &[(&str, &str)]) {
    let template_root = store_root.join("templates").join(template);
    fs::create_dir_all(&template_root).unwrap();

    let manifest: String = entries.iter().map(|(entry, _)| format!("{entry}\n")).collect();
    fs::write(template_root.join("MANIFEST"), manifest).unwrap();

    for (entry, content) in entries {
        let path = template_root.join(entry);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Lists every file under `root` as a relative-path -> content map.
pub fn list_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut tree = BTreeMap::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
    {
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        tree.insert(rel, fs::read(entry.path()).unwrap());
    }
    tree
}
