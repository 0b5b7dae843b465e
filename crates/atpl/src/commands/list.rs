//! List available templates

use anyhow::{Context, Result};
use tracing::debug;

use atpl_templates::detect_source;

pub async fn run() -> Result<()> {
    let source = detect_source().context("Failed to resolve a template source")?;
    debug!("Listing templates from {} source", source.name());

    let names = source
        .list_templates()
        .await
        .context("Failed to list templates")?;

    // Bare names on stdout, one per line, so the output stays scriptable.
    for name in names {
        println!("{name}");
    }
    Ok(())
}
