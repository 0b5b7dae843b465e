//! # atpl-templates
//!
//! Template library for the atpl CLI providing:
//! - Template sources (local filesystem root, remote GitHub repository)
//! - Copy planning against an existing destination
//! - Recursive tree copying with per-file backups
//!
//! A source is selected once per invocation and exposed behind the
//! [`TemplateSource`] trait, so the rest of the pipeline never branches on
//! where template bytes come from.
//!
//! # Examples
//!
//! ```no_run
//! use atpl_templates::{copy_tree, detect_source};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = detect_source()?;
//! let fetched = source.fetch("rust-api").await?;
//! copy_tree(fetched.dir(), Utf8Path::new("/tmp/my-project"))?;
//! fetched.cleanup();
//! # Ok(())
//! # }
//! ```

pub mod copier;
pub mod error;
pub mod local;
pub mod plan;
pub mod remote;
pub mod source;

pub use copier::copy_tree;
pub use error::{Error, Result};
pub use local::LocalSource;
pub use plan::{CopyAction, CopyPlan, PlanEntry};
pub use remote::RemoteSource;
pub use source::{detect_source, FetchedTemplate, TemplateSource};
