use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about = "Single-screen terminal storefront")]
pub struct Cli {
    /// Path to the config file (default: ~/.config/vitrine/config.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the UI tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub tick_rate: Option<u64>,
}
