mod cli;
mod commands;
mod config;
mod logger;

use clap::Parser;
use cli::Cli;
use config::CliConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            CliConfig::from_file(path)?
        }
        None => CliConfig::default(),
    };
    tracing::debug!(?config, "display defaults");

    let output = commands::run(&cli.command, &config.format)?;
    println!("{output}");
    Ok(())
}
