//! CLI command implementations

pub mod list;
pub mod new;

use tracing::debug;

use atpl_templates::detect_source;

/// Print usage plus the available template names to stderr. Called when no
/// template name was given; the listing is best-effort.
pub async fn print_usage() {
    eprintln!("Usage: atpl <template-name> [project-name]");
    eprintln!("       atpl list");

    let source = match detect_source() {
        Ok(source) => source,
        Err(err) => {
            debug!("No template source for usage hint: {}", err);
            return;
        }
    };
    match source.list_templates().await {
        Ok(names) if !names.is_empty() => {
            eprintln!();
            eprintln!("Available templates:");
            for name in names {
                eprintln!("  {name}");
            }
        }
        Ok(_) => {}
        Err(err) => debug!("Could not list templates for usage hint: {}", err),
    }
}
