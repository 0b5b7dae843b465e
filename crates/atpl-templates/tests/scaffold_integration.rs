//! Integration tests for the local template workflow
//!
//! These tests exercise the complete path from a template root on disk to a
//! scaffolded destination: source listing, template fetch, copy planning,
//! and the copy itself.

use atpl_templates::{copy_tree, CopyAction, CopyPlan, Error, LocalSource, TemplateSource};
use camino::{Utf8Path, Utf8PathBuf};

fn write(path: &std::path::Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Template root with two templates plus a stray file that must never be
/// listed as a template.
fn template_root() -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    write(&root.path().join("node/package.json"), "{\"name\": \"app\"}");
    write(&root.path().join("node/src/index.js"), "console.log('hi');\n");
    write(&root.path().join("node/.gitignore"), "node_modules/\n");
    write(&root.path().join("rust-api/Cargo.toml"), "[package]\n");
    write(&root.path().join("rust-api/src/main.rs"), "fn main() {}\n");
    write(&root.path().join("README.md"), "not a template");
    root
}

fn local_source(root: &tempfile::TempDir) -> LocalSource {
    LocalSource::new(Utf8PathBuf::from_path_buf(root.path().to_path_buf()).unwrap())
}

#[tokio::test]
async fn test_list_templates_directories_only_sorted() {
    let root = template_root();
    let source = local_source(&root);

    let names = source.list_templates().await.unwrap();
    assert_eq!(names, vec!["node".to_string(), "rust-api".to_string()]);
}

#[tokio::test]
async fn test_fetch_known_template() {
    let root = template_root();
    let source = local_source(&root);

    let fetched = source.fetch("node").await.unwrap();
    assert!(!fetched.is_downloaded());
    assert!(fetched.dir().join("package.json").is_file());
    fetched.cleanup();
}

#[tokio::test]
async fn test_fetch_unknown_template_fails() {
    let root = template_root();
    let source = local_source(&root);

    let err = source.fetch("elixir").await.unwrap_err();
    assert!(matches!(err, Error::TemplateNotFound { .. }));
    assert_eq!(err.to_string(), "Template not found: elixir");
}

#[tokio::test]
async fn test_scaffold_into_empty_destination_mirrors_template() {
    let root = template_root();
    let source = local_source(&root);
    let dest = tempfile::tempdir().unwrap();
    let dest_path = Utf8Path::from_path(dest.path()).unwrap();

    let fetched = source.fetch("node").await.unwrap();
    let copied = copy_tree(fetched.dir(), dest_path).unwrap();
    fetched.cleanup();

    assert_eq!(copied, 3);
    assert_eq!(
        std::fs::read_to_string(dest.path().join("package.json")).unwrap(),
        "{\"name\": \"app\"}"
    );
    assert_eq!(
        std::fs::read_to_string(dest.path().join("src/index.js")).unwrap(),
        "console.log('hi');\n"
    );
    assert_eq!(
        std::fs::read_to_string(dest.path().join(".gitignore")).unwrap(),
        "node_modules/\n"
    );
    // No backups in a previously empty destination.
    assert!(!dest.path().join("package.json.backup").exists());
}

#[tokio::test]
async fn test_scaffold_twice_keeps_single_backup_per_path() {
    let root = template_root();
    let source = local_source(&root);
    let dest = tempfile::tempdir().unwrap();
    let dest_path = Utf8Path::from_path(dest.path()).unwrap();
    write(&dest.path().join("package.json"), "pre-existing");

    let fetched = source.fetch("node").await.unwrap();
    copy_tree(fetched.dir(), dest_path).unwrap();
    copy_tree(fetched.dir(), dest_path).unwrap();
    fetched.cleanup();

    // One backup only, holding what the second run overwrote.
    assert_eq!(
        std::fs::read_to_string(dest.path().join("package.json.backup")).unwrap(),
        "{\"name\": \"app\"}"
    );
    assert!(!dest.path().join("package.json.backup.backup").exists());
    // Files that never pre-existed get no backup either run.
    assert!(dest.path().join("src/index.js").is_file());
    assert!(!dest.path().join("src/index.js.backup").exists());
}

#[tokio::test]
async fn test_plan_matches_destination_state() {
    let root = template_root();
    let source = local_source(&root);
    let dest = tempfile::tempdir().unwrap();
    let dest_path = Utf8Path::from_path(dest.path()).unwrap();
    write(&dest.path().join("Cargo.toml"), "[package]\nname = \"old\"\n");

    let fetched = source.fetch("rust-api").await.unwrap();
    let plan = CopyPlan::prepare(fetched.dir(), dest_path).unwrap();
    fetched.cleanup();

    assert_eq!(plan.len(), 2);
    assert_eq!(plan.backups(), 1);
    let toml = plan
        .entries
        .iter()
        .find(|entry| entry.relative == Utf8Path::new("Cargo.toml"))
        .unwrap();
    assert_eq!(toml.action, CopyAction::Backup);
}
