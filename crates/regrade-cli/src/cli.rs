//! CLI argument definitions for regrade.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "regrade")]
#[command(about = "Regrade autograder feedback files", version)]
pub struct Args {
    /// Directory holding the feedback files
    #[arg(long, global = true, env = "REGRADE_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Grading policy file (TOML)
    #[arg(long, global = true, env = "REGRADE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the batch report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Copy feedback files graded above 100 into perfects/
    Perfects,
    /// Write Ranks.csv from the in-game score of each feedback file
    Rank {
        /// Order rows by score, highest first
        #[arg(long)]
        sort: bool,
    },
    /// Regrade every .txt file into grades_revised.csv
    Reprocess {
        /// Also write <name>_revised.txt files (0 or 1)
        #[arg(
            value_name = "WRITE_TXT",
            value_parser = parse_flag,
            action = ArgAction::Set,
            required = true
        )]
        write_revised: bool,
    },
}

fn parse_flag(s: &str) -> Result<bool, String> {
    match s {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(format!("expected 0 or 1, got {:?}", other)),
    }
}
