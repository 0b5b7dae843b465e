//! Scaffold a project from a template

use anyhow::{Context, Result};
use dialoguer::Confirm;
use tracing::debug;

use atpl_core::paths::dir_is_empty;
use atpl_templates::{copy_tree, detect_source, CopyAction, CopyPlan, FetchedTemplate};

use crate::output;
use crate::utils::Destination;

pub async fn run(template: &str, project: Option<&str>, force: bool) -> Result<()> {
    let source = detect_source().context("Failed to resolve a template source")?;
    debug!("Using {} template source", source.name());

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let dest = Destination::resolve(template, project, &cwd)?;

    output::kv("Template", template);
    output::kv("Location", dest.path().as_str());

    let spinner = output::spinner(&format!("Fetching template '{template}'"));
    let fetched = source.fetch(template).await;
    spinner.finish_and_clear();
    let fetched = fetched.with_context(|| format!("Failed to fetch template '{template}'"))?;

    let result = scaffold(template, &fetched, &dest, force);

    // The temporary download directory goes away regardless of how the copy
    // went; a failure there is a warning and never changes the exit code.
    fetched.cleanup();
    result
}

fn scaffold(template: &str, fetched: &FetchedTemplate, dest: &Destination, force: bool) -> Result<()> {
    if dest.path().exists() && !dir_is_empty(dest.path())? {
        let plan = CopyPlan::prepare(fetched.dir(), dest.path())
            .with_context(|| format!("Failed to read template '{template}'"))?;

        output::header(&format!("Destination {} is not empty", dest.path()));
        for entry in &plan.entries {
            match entry.action {
                CopyAction::Create => println!("  + {}", entry.relative),
                CopyAction::Backup => {
                    println!("  ~ {} (existing file will be backed up)", entry.relative)
                }
            }
        }
        println!();

        if !force {
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "Copy {} file(s) into '{}'?",
                    plan.len(),
                    dest.name()
                ))
                .default(false)
                .interact()?;

            if !confirmed {
                println!("Aborting.");
                return Ok(());
            }
        }
    } else {
        std::fs::create_dir_all(dest.path())
            .with_context(|| format!("Failed to create {}", dest.path()))?;
    }

    let copied = copy_tree(fetched.dir(), dest.path())
        .with_context(|| format!("Failed to copy template '{template}'"))?;

    output::success(&format!(
        "Created project '{}' from template '{}' ({} files)",
        dest.name(),
        template,
        copied
    ));
    if !dest.is_current_dir() {
        output::info(&format!("Next: cd {}", dest.name()));
    }
    Ok(())
}
