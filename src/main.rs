mod cli;
mod commands;
mod config;
mod error;
mod telemetry;

use std::error::Error;

use clap::Parser;

use cli::{Cli, Commands};
use config::Config;

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = Config::resolve(cli.config.as_deref())?;
    telemetry::init(config.log_level.as_deref())?;

    match cli.command {
        Commands::Score {
            facts,
            json,
            top,
            no_flags,
        } => commands::score(&facts, json, top, no_flags, &config.report),
        Commands::Diff {
            before,
            after,
            json,
            all,
        } => commands::diff(&before, &after, json, all),
        Commands::Terms { json } => commands::terms(json),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
