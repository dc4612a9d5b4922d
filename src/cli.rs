use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rangeprune",
    about = "Remove numbered directories within a range",
    long_about = "Remove numbered directories within a range.\n\n\
                  With no subcommand, runs a dry run over the configured range in \
                  the current directory and then asks whether to delete for real.",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ~/.config/rangeprune/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview which directories would be removed (dry-run, no deletion)
    Scan(RangeArgs),

    /// Remove directories in the range after confirmation
    Clean(RangeArgs),
}

#[derive(Args, Clone, Default)]
pub struct RangeArgs {
    /// First directory number to remove (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Last directory number to remove (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Directory containing the numbered folders
    #[arg(long)]
    pub path: Option<PathBuf>,
}
