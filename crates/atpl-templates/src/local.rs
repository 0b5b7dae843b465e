//! Local filesystem template source
//!
//! Used when a `templates/` root is installed next to the binary (a checkout
//! or a packaged install), or when ATPL_TEMPLATES_DIR points at one.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use atpl_core::config::{TEMPLATES_DIR_ENV, TEMPLATES_PREFIX};

use crate::error::{Error, Result};
use crate::source::{FetchedTemplate, TemplateSource};

/// Template source backed by a local directory of template subdirectories
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: Utf8PathBuf,
}

impl LocalSource {
    /// Create a source over an existing template root
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    /// Find an installed template root: ATPL_TEMPLATES_DIR first, then a
    /// `templates/` directory next to the running binary.
    pub fn discover() -> Option<Utf8PathBuf> {
        if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
            let root = Utf8PathBuf::from(dir);
            if root.is_dir() {
                debug!("Using template root from {}: {}", TEMPLATES_DIR_ENV, root);
                return Some(root);
            }
        }

        let exe = std::env::current_exe().ok()?;
        let base = exe.parent()?;
        let root = Utf8PathBuf::from_path_buf(base.join(TEMPLATES_PREFIX)).ok()?;
        if root.is_dir() {
            debug!("Using template root next to binary: {}", root);
            return Some(root);
        }
        None
    }

    /// Template root directory
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

#[async_trait]
impl TemplateSource for LocalSource {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn list_templates(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry
                .file_name()
                .into_string()
                .map_err(|name| Error::invalid_path(name.to_string_lossy().into_owned()))?;
            names.push(name);
        }
        names.sort();
        Ok(names)
    }

    async fn fetch(&self, template: &str) -> Result<FetchedTemplate> {
        let dir = self.root.join(template);
        if !dir.is_dir() {
            return Err(Error::template_not_found(template));
        }
        Ok(FetchedTemplate::local(dir))
    }
}
