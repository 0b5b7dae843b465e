//! Copy planning against an existing destination
//!
//! Before writing into a non-empty destination the CLI shows the user what a
//! copy would do: every file the template carries, marked as a plain
//! creation or as an overwrite of an existing file (which will be backed up
//! first).

use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

use atpl_core::paths::relative_utf8;

use crate::error::Result;

/// What the copier will do for one template file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    /// No file exists at the destination path
    Create,
    /// A file exists and will be copied to a `.backup` sibling first
    Backup,
}

/// One planned file copy
#[derive(Debug, Clone)]
pub struct PlanEntry {
    /// Path relative to the template root
    pub relative: Utf8PathBuf,

    /// Planned action
    pub action: CopyAction,
}

/// Ordered list of planned file copies
#[derive(Debug, Default)]
pub struct CopyPlan {
    /// Entries in depth-first template order
    pub entries: Vec<PlanEntry>,
}

impl CopyPlan {
    /// Walk the template tree and record, per file, whether the destination
    /// already has a same-relative-path file.
    pub fn prepare(template_dir: &Utf8Path, dest: &Utf8Path) -> Result<Self> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(template_dir).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = relative_utf8(entry.path(), template_dir)?;
            let action = if dest.join(&relative).is_file() {
                CopyAction::Backup
            } else {
                CopyAction::Create
            };
            entries.push(PlanEntry { relative, action });
        }
        Ok(Self { entries })
    }

    /// Number of planned file copies
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the template carries no files at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files that will be backed up before overwrite
    pub fn backups(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.action == CopyAction::Backup)
            .count()
    }
}
