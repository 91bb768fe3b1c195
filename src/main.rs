use anyhow::Result;
use clap::Parser;
use fieldops::config::Config;
use fieldops::logging;

mod cli;

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(cli.verbose, config.log_level());
    dispatch(cli.command, &config)
}
