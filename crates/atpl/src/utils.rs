//! Utility functions shared across CLI commands

use anyhow::{anyhow, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::path::Path;

/// Resolved scaffold destination
///
/// `.`, `./`, an empty project name, and the absolute current working
/// directory all mean "scaffold into the current directory"; that case is
/// remembered so the final navigation hint can be suppressed.
#[derive(Debug, Clone)]
pub struct Destination {
    path: Utf8PathBuf,
    name: String,
    current_dir: bool,
}

impl Destination {
    /// Resolve the destination from the template name, the optional project
    /// name, and the working directory.
    pub fn resolve(template: &str, project: Option<&str>, cwd: &Path) -> Result<Self> {
        let cwd = Utf8Path::from_path(cwd)
            .ok_or_else(|| anyhow!("Current directory is not valid UTF-8: {}", cwd.display()))?;
        let raw = project.unwrap_or(template);

        if raw.is_empty() || raw == "." || raw == "./" || Utf8Path::new(raw) == cwd {
            return Ok(Self {
                path: cwd.to_path_buf(),
                name: ".".to_string(),
                current_dir: true,
            });
        }

        Ok(Self {
            path: cwd.join(raw),
            name: raw.to_string(),
            current_dir: false,
        })
    }

    /// Absolute destination directory
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Name as given on the command line (used in messages)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the destination is the current working directory
    pub fn is_current_dir(&self) -> bool {
        self.current_dir
    }
}
