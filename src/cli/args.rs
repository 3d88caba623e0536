//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. There are no subcommands:
//! running the binary performs the whole setup.

use clap::Parser;
use std::path::PathBuf;

/// Fetch, build, and document dnSpy with an up-to-date .NET SDK.
#[derive(Debug, Default, Parser)]
#[command(name = "dnspy-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides <project>/.dnspy-setup.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
