//! # atpl-core
//!
//! Core library for the atpl CLI providing:
//! - Shared error types
//! - Template registry configuration (remote repository coordinates)
//! - Path helpers used by the scaffolding pipeline

pub mod config;
pub mod error;
pub mod paths;

pub use config::{RegistryConfig, TEMPLATES_PREFIX};
pub use error::{Error, Result};
