//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Rotate and fade a picture from your terminal.
#[derive(Debug, Parser)]
#[command(name = "spinfade", version, about)]
pub struct Cli {
    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Render a local picture file instead of fetching the bundled URL.
    #[arg(long, value_name = "PATH")]
    pub picture: Option<PathBuf>,
}
