use anyhow::{bail, Context};
use clap::Parser;
use std::time::Duration;

use vitrine::args::Cli;
use vitrine::config::Config;
use vitrine::logging::init_tracing;
use vitrine::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    let tick_rate_ms = cli.tick_rate.unwrap_or(config.ui.tick_rate_ms);
    if tick_rate_ms == 0 {
        bail!("--tick-rate must be greater than 0");
    }

    tracing::info!(tick_rate_ms, "starting shopping page");
    runtime::run(Duration::from_millis(tick_rate_ms))?;
    Ok(())
}
