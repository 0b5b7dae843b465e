//! Template registry configuration
//!
//! Templates live under a `templates/` prefix, either in a directory next to
//! the installed binary or in a remote GitHub repository. The remote
//! coordinates carry compiled-in defaults and can be overridden per
//! invocation through environment variables.

/// Repository subdirectory under which templates live, local and remote.
pub const TEMPLATES_PREFIX: &str = "templates";

/// Environment variable pointing at a local template root. When set (and the
/// directory exists) it takes precedence over the remote registry.
pub const TEMPLATES_DIR_ENV: &str = "ATPL_TEMPLATES_DIR";

/// Remote template registry coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Repository owner
    pub repo_owner: String,

    /// Repository name
    pub repo_name: String,

    /// Branch to read templates from
    pub branch: String,

    /// Base URL for the repository-contents API
    pub api_url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            repo_owner: default_repo_owner(),
            repo_name: default_repo_name(),
            branch: default_branch(),
            api_url: default_api_url(),
        }
    }
}

fn default_repo_owner() -> String {
    "atpl-cli".to_string()
}
fn default_repo_name() -> String {
    "atpl".to_string()
}
fn default_branch() -> String {
    "main".to_string()
}
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

impl RegistryConfig {
    /// Build the configuration from defaults plus environment overrides
    /// (ATPL_REPO_OWNER, ATPL_REPO_NAME, ATPL_BRANCH, ATPL_API_URL).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(owner) = std::env::var("ATPL_REPO_OWNER") {
            config.repo_owner = owner;
        }
        if let Ok(name) = std::env::var("ATPL_REPO_NAME") {
            config.repo_name = name;
        }
        if let Ok(branch) = std::env::var("ATPL_BRANCH") {
            config.branch = branch;
        }
        if let Ok(url) = std::env::var("ATPL_API_URL") {
            config.api_url = url;
        }
        config
    }

    /// Contents-API URL for a repository path
    pub fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_url, self.repo_owner, self.repo_name, path, self.branch
        )
    }

    /// In-repository path of a named template
    pub fn template_path(&self, template: &str) -> String {
        format!("{TEMPLATES_PREFIX}/{template}")
    }
}
