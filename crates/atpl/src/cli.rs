//! CLI argument parsing with clap

use clap::Parser;

/// Reserved template name that switches to listing mode.
pub const LIST_COMMAND: &str = "list";

/// atpl - copy starter project templates into place
///
/// `atpl <template-name> [project-name]` scaffolds a project,
/// `atpl list` shows the available templates.
#[derive(Parser, Debug)]
#[command(name = "atpl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Template to scaffold, or "list" to show available templates
    pub template: Option<String>,

    /// Project directory name (defaults to the template name; "." scaffolds
    /// into the current directory)
    pub project: Option<String>,

    /// Overwrite without asking when the destination is not empty
    #[arg(short, long)]
    pub force: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}
