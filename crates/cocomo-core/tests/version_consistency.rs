//! Ensures all workspace crates use `version.workspace = true` and that
//! the workspace version is consistent across all Cargo.toml files.

use std::path::Path;

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
}

fn read_toml(path: &Path) -> toml::Value {
    let content = std::fs::read_to_string(path).unwrap();
    content.parse().unwrap()
}

/// Returns "workspace" for `version.workspace = true`, else the literal version.
fn crate_version(manifest_dir: &Path) -> String {
    let doc = read_toml(&manifest_dir.join("Cargo.toml"));
    let version = doc
        .get("package")
        .and_then(|pkg| pkg.get("version"))
        .unwrap_or_else(|| panic!("no package.version in {}", manifest_dir.display()));

    if let Some(table) = version.as_table() {
        if table.get("workspace").and_then(|v| v.as_bool()) == Some(true) {
            return "workspace".to_string();
        }
    }
    version
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| panic!("unreadable version in {}", manifest_dir.display()))
}

#[test]
fn all_crates_use_workspace_version() {
    let root = read_toml(&workspace_root().join("Cargo.toml"));
    let members = root["workspace"]["members"].as_array().unwrap();
    assert!(!members.is_empty());

    for member in members {
        let krate = member.as_str().unwrap();
        let version = crate_version(&workspace_root().join(krate));
        assert_eq!(
            version, "workspace",
            "{} should use version.workspace = true, got version = {:?}",
            krate, version
        );
    }
}

#[test]
fn workspace_version_matches_cargo_pkg() {
    let root = read_toml(&workspace_root().join("Cargo.toml"));
    let ws_version = root["workspace"]["package"]["version"].as_str().unwrap();
    assert_eq!(ws_version, env!("CARGO_PKG_VERSION"));
    assert_eq!(cocomo_core::VERSION, ws_version);
}
