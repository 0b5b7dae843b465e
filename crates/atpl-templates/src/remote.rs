//! Remote template source backed by the GitHub repository-contents API
//!
//! A template is fetched by walking its directory listing depth-first and
//! downloading each file entry into a temporary directory, preserving the
//! relative structure. Failure policy: the root listing must succeed (a 404
//! there means the template does not exist and nothing is written); once the
//! root has resolved, a listing failure for a nested subdirectory is logged
//! and that subtree is skipped rather than discarding the files already
//! downloaded. A failed file download is always fatal.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use futures::future::BoxFuture;
use serde::Deserialize;
use tempfile::TempDir;
use tracing::{debug, warn};

use atpl_core::config::{RegistryConfig, TEMPLATES_PREFIX};
use atpl_core::paths::utf8_path;

use crate::error::{Error, Result};
use crate::source::{FetchedTemplate, TemplateSource};

const USER_AGENT: &str = concat!("atpl/", env!("CARGO_PKG_VERSION"));

/// One entry of a repository-contents listing
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    /// Entry name (final path component)
    pub name: String,

    /// Repository-relative path
    pub path: String,

    /// Entry kind
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Raw-content URL, present for file entries
    pub download_url: Option<String>,
}

/// Contents-API entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, submodules, and anything the API grows later
    #[serde(other)]
    Other,
}

/// Template source backed by a remote GitHub repository
pub struct RemoteSource {
    client: reqwest::Client,
    config: RegistryConfig,
}

impl RemoteSource {
    /// Create a source over the given registry coordinates
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    /// Create a source from the default registry plus environment overrides
    pub fn from_env() -> Result<Self> {
        Self::new(RegistryConfig::from_env())
    }

    /// Registry coordinates in use
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// List one remote directory
    async fn list_dir(&self, path: &str) -> Result<Vec<ContentEntry>> {
        let url = self.config.contents_url(path);
        debug!("Listing {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::remote_not_found(path));
        }
        if !response.status().is_success() {
            return Err(Error::listing(path, response.status().to_string()));
        }

        Ok(response.json().await?)
    }

    /// Download one file entry to `dest`
    async fn download_file(&self, entry: &ContentEntry, dest: &Utf8Path) -> Result<()> {
        let url = entry
            .download_url
            .as_deref()
            .ok_or_else(|| Error::download(&entry.path, "entry has no download URL"))?;
        debug!("Downloading {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::download(url, response.status().to_string()));
        }
        let bytes = response.bytes().await?;

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(dest, &bytes)?;
        Ok(())
    }

    /// Recursively download `path` into `dest`, depth-first.
    ///
    /// `is_root` selects the failure policy described in the module docs:
    /// a root listing failure aborts the fetch, a nested one skips the
    /// subtree with a warning.
    fn download_dir(
        &self,
        path: String,
        dest: Utf8PathBuf,
        is_root: bool,
    ) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            let entries = match self.list_dir(&path).await {
                Ok(entries) => entries,
                Err(err) if is_root => return Err(err),
                Err(err) => {
                    warn!("Skipping {}: {}", path, err);
                    return Ok(());
                }
            };

            for entry in entries {
                let target = dest.join(&entry.name);
                match entry.kind {
                    EntryKind::Dir => {
                        std::fs::create_dir_all(&target)?;
                        self.download_dir(entry.path.clone(), target, false).await?;
                    }
                    EntryKind::File => self.download_file(&entry, &target).await?,
                    EntryKind::Other => debug!("Ignoring unsupported entry: {}", entry.path),
                }
            }
            Ok(())
        })
    }
}

#[async_trait]
impl TemplateSource for RemoteSource {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn list_templates(&self) -> Result<Vec<String>> {
        let entries = self.list_dir(TEMPLATES_PREFIX).await?;
        let mut names: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::Dir)
            .map(|entry| entry.name)
            .collect();
        names.sort();
        Ok(names)
    }

    async fn fetch(&self, template: &str) -> Result<FetchedTemplate> {
        let temp = TempDir::with_prefix("atpl-")?;
        let dir = utf8_path(temp.path())?;

        match self
            .download_dir(self.config.template_path(template), dir.clone(), true)
            .await
        {
            Ok(()) => Ok(FetchedTemplate::downloaded(dir, temp)),
            // Dropping `temp` here removes whatever was partially written.
            Err(Error::RemoteNotFound { .. }) => Err(Error::template_not_found(template)),
            Err(err) => Err(err),
        }
    }
}
