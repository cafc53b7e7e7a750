//! Command-line interface implementation for inam-ui.
//! Provides argument parsing using clap. A bare component name is shorthand
//! for the `add` subcommand, so `inam-ui button` and `inam-ui add button`
//! are equivalent.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for inam-ui.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "inam-ui: copy ready-made React UI components into your project",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Shorthand for `add`: a bare component name at the top level
    #[command(flatten)]
    pub add: AddArgs,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a component in the target project
    Add(AddArgs),

    /// List all available components
    List(ListArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct AddArgs {
    /// Component to generate; prompts interactively when omitted
    #[arg(value_name = "COMPONENT")]
    pub component: Option<String>,

    /// Target directory (defaults to the configured path)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing component file
    #[arg(short, long)]
    pub force: bool,

    /// Skip project dependency checks
    #[arg(long)]
    pub skip_checks: bool,
}

#[derive(ClapArgs, Debug, Default)]
pub struct ListArgs {
    /// Filter by category (Form, Layout, Overlay, Feedback, Progress)
    #[arg(short, long, value_name = "NAME")]
    pub category: Option<String>,

    /// Search components by name or description
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
