//! Recursive tree copy with per-file backups
//!
//! Directories are created ahead of the files under them (depth-first walk).
//! A file that would be overwritten is first copied to a `<path>.backup`
//! sibling; the backup is advisory, so a failure to write it is a warning
//! while the overwrite itself proceeds. At most one backup exists per path
//! per run: a later overwrite of the same path replaces the earlier backup.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use atpl_core::paths::relative_utf8;

use crate::error::Result;

/// Copy every entry under `src` into `dest`, returning the number of files
/// written.
pub fn copy_tree(src: &Utf8Path, dest: &Utf8Path) -> Result<usize> {
    std::fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = relative_utf8(entry.path(), src)?;
        let target = dest.join(&relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
            continue;
        }
        if !entry.file_type().is_file() {
            debug!("Skipping non-regular entry: {}", relative);
            continue;
        }

        if target.is_file() {
            back_up(&target);
            std::fs::remove_file(&target)?;
        }
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(entry.path(), &target)?;
        copied += 1;
    }
    Ok(copied)
}

/// Sibling path holding the pre-overwrite content of `path`
pub fn backup_path(path: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{path}.backup"))
}

fn back_up(target: &Utf8Path) {
    let backup = backup_path(target);
    if let Err(err) = std::fs::copy(target, &backup) {
        warn!("Failed to back up {}: {}", target, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &std::path::Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    fn utf8(path: &std::path::Path) -> &Utf8Path {
        Utf8Path::from_path(path).unwrap()
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Utf8Path::new("proj/src/main.rs")),
            Utf8PathBuf::from("proj/src/main.rs.backup")
        );
    }

    #[test]
    fn test_copy_tree_into_empty_destination() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        write(&src.path().join("README.md"), "readme");
        write(&src.path().join("src/main.rs"), "fn main() {}");
        write(&src.path().join(".gitignore"), "/target");

        let copied = copy_tree(utf8(src.path()), utf8(dest.path())).unwrap();

        assert_eq!(copied, 3);
        assert_eq!(
            std::fs::read_to_string(dest.path().join("README.md")).unwrap(),
            "readme"
        );
        assert_eq!(
            std::fs::read_to_string(dest.path().join("src/main.rs")).unwrap(),
            "fn main() {}"
        );
        assert_eq!(
            std::fs::read_to_string(dest.path().join(".gitignore")).unwrap(),
            "/target"
        );
    }

    #[test]
    fn test_copy_tree_backs_up_overwritten_files() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        write(&src.path().join("config.toml"), "new");
        write(&dest.path().join("config.toml"), "old");
        write(&dest.path().join("unrelated.txt"), "keep me");

        copy_tree(utf8(src.path()), utf8(dest.path())).unwrap();

        assert_eq!(
            std::fs::read_to_string(dest.path().join("config.toml")).unwrap(),
            "new"
        );
        assert_eq!(
            std::fs::read_to_string(dest.path().join("config.toml.backup")).unwrap(),
            "old"
        );
        assert_eq!(
            std::fs::read_to_string(dest.path().join("unrelated.txt")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_second_copy_replaces_backup_not_chains() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        write(&src.path().join("file.txt"), "template");
        write(&dest.path().join("file.txt"), "original");

        copy_tree(utf8(src.path()), utf8(dest.path())).unwrap();
        copy_tree(utf8(src.path()), utf8(dest.path())).unwrap();

        // Second run backs up the first run's output; no .backup.backup.
        assert_eq!(
            std::fs::read_to_string(dest.path().join("file.txt.backup")).unwrap(),
            "template"
        );
        assert!(!dest.path().join("file.txt.backup.backup").exists());
    }

    #[test]
    fn test_copy_tree_creates_missing_destination() {
        let src = tempfile::tempdir().unwrap();
        let base = tempfile::tempdir().unwrap();
        write(&src.path().join("a/b/deep.txt"), "deep");
        let dest = base.path().join("new/project");

        let copied = copy_tree(utf8(src.path()), utf8(&dest)).unwrap();

        assert_eq!(copied, 1);
        assert_eq!(
            std::fs::read_to_string(dest.join("a/b/deep.txt")).unwrap(),
            "deep"
        );
    }
}
