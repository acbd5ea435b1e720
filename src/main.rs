use anyhow::Context;
use clap::Parser;

use spinfade::cli::Cli;
use spinfade::config::Config;
use spinfade::logging;
use spinfade::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    runtime::run(config, cli.picture)?;
    Ok(())
}
