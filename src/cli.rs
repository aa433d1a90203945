use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "resume-scan",
    version,
    about = "Score a resume's extracted text against a weighted skill vocabulary"
)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a text document
    Scan(ScanArgs),
    /// List the active vocabulary
    Vocab(VocabArgs),
    /// Write a default resume-scan.toml in the current directory
    Init,
}

#[derive(Debug, Args, Clone)]
pub struct ScanArgs {
    /// Text file to score, or `-` for stdin
    #[arg(long, default_value = "-")]
    pub path: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
    /// Fail (exit 1) when the percentage is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

#[derive(Debug, Args, Clone)]
pub struct VocabArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}
