// Wed Jan 21 2026 - Alex

use crate::bounds::BoundsCheckMode;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bounds-check")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Validates and sanitizes jagged embedding lookup batches", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Log level (error, warn, info, debug, trace, off)")]
    pub log_level: Option<String>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only print errors")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a batch file and write the sanitized batch
    Check(CheckArgs),
    /// Describe a batch file without modifying it
    Stats(StatsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndexType {
    I32,
    I64,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[arg(short, long, help = "Batch JSON file")]
    pub input: PathBuf,

    #[arg(short, long, help = "Where to write the sanitized batch")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Overrides the configured mode")]
    pub mode: Option<BoundsCheckMode>,

    #[arg(long, value_enum, default_value = "i64")]
    pub index_type: IndexType,

    #[arg(long, help = "Disable the parallel element pass")]
    pub sequential: bool,

    #[arg(long, help = "Number of worker threads")]
    pub threads: Option<usize>,

    #[arg(long, help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Write the output batch without indentation")]
    pub compact: bool,
}

impl CheckArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.input.exists() {
            return Err(format!("Input file does not exist: {:?}", self.input));
        }
        if self.threads == Some(0) {
            return Err("--threads must be greater than 0".to_string());
        }
        if self.output.as_ref() == Some(&self.input) {
            return Err("Output must differ from input".to_string());
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    #[arg(short, long, help = "Batch JSON file")]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value = "i64")]
    pub index_type: IndexType,

    #[arg(long, help = "Print the statistics as JSON")]
    pub json: bool,
}
