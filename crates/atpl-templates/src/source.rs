//! Template source trait definitions
//!
//! Every source answers the same two questions: which templates exist, and
//! where does a fully materialized copy of one live on the local filesystem.
//! Remote sources answer the second by downloading into a temporary
//! directory they hand over with the result.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tracing::warn;

use crate::error::Result;
use crate::local::LocalSource;
use crate::remote::RemoteSource;

/// Source of template trees
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Get the source name
    fn name(&self) -> &'static str;

    /// List available template names (directories only, sorted)
    async fn list_templates(&self) -> Result<Vec<String>>;

    /// Materialize a template as a local directory tree
    async fn fetch(&self, template: &str) -> Result<FetchedTemplate>;
}

/// Select the template source for this invocation: a local template root
/// when one is installed, the remote registry otherwise.
pub fn detect_source() -> Result<Box<dyn TemplateSource>> {
    match LocalSource::discover() {
        Some(root) => Ok(Box::new(LocalSource::new(root))),
        None => Ok(Box::new(RemoteSource::from_env()?)),
    }
}

/// A template resolved to a local directory, together with the temporary
/// directory backing it when the template was downloaded.
#[derive(Debug)]
pub struct FetchedTemplate {
    dir: Utf8PathBuf,
    temp: Option<TempDir>,
}

impl FetchedTemplate {
    /// A template that already lives on disk; nothing to clean up.
    pub fn local(dir: Utf8PathBuf) -> Self {
        Self { dir, temp: None }
    }

    /// A template downloaded into a temporary directory owned by this value.
    pub fn downloaded(dir: Utf8PathBuf, temp: TempDir) -> Self {
        Self {
            dir,
            temp: Some(temp),
        }
    }

    /// Directory holding the template tree
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Whether the template was downloaded into a temporary directory
    pub fn is_downloaded(&self) -> bool {
        self.temp.is_some()
    }

    /// Remove the backing temporary directory, if any. Best-effort: a
    /// failure is logged and must not affect the process exit code.
    pub fn cleanup(self) {
        if let Some(temp) = self.temp {
            let path = temp.path().to_path_buf();
            if let Err(err) = temp.close() {
                warn!("Failed to remove temporary directory {}: {}", path.display(), err);
            }
        }
    }
}
