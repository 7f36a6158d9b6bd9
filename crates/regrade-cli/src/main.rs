mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the default info level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("regrade_cli=info,regrade_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let policy = cli_utils::load_policy(args.config.as_deref())?;

    let report = match args.command {
        Command::Perfects => commands::perfects::run(&args.dir, &policy)?,
        Command::Rank { sort } => commands::rank::run(&args.dir, &policy, sort)?,
        Command::Reprocess { write_revised } => {
            commands::reprocess::run(&args.dir, &policy, write_revised)?
        }
    };

    cli_utils::print_report(&report, args.json)
}
