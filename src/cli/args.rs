//! CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pathos")]
#[command(about = "Interactive PATH editor - reorder, prune and persist PATH entries")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Env-file to load and save (default: ~/.pathos.env)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Variable to seed from and export (default: PATH)
    #[arg(long, value_name = "NAME")]
    pub var: Option<String>,

    /// Print the export line for the current list and exit
    #[arg(short, long)]
    pub print: bool,

    /// Open the pathos config file in $EDITOR
    #[arg(long)]
    pub config: bool,
}
