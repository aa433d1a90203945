mod cli;
mod config;
mod core;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, ScanArgs, VocabArgs};
use crate::core::report::{self, JsonReport, NoTextJson, VocabularyJson};
use crate::core::score::Scan;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RESUME_SCAN_LOG";
const EXIT_NO_TEXT: i32 = 3;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Scan(args) => run_scan(args),
        Commands::Vocab(args) => run_vocab(args),
        Commands::Init => {
            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_scan(args: ScanArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    debug!(config = ?loaded.source, "configuration resolved");
    let source = resolve_source(&cwd, &args.path);
    let scan = core::run_scan(&source, &loaded.config)?;

    let output_json = args.json || loaded.config.general.json;
    let min_score = args.min_score.unwrap_or(loaded.config.general.min_score);

    let report = match scan {
        Scan::NoText => {
            if output_json {
                println!("{}", serde_json::to_string_pretty(&NoTextJson::default())?);
            } else {
                report::print_no_text();
            }
            return Ok(EXIT_NO_TEXT);
        }
        Scan::Scored(report) => report,
    };

    let exit = report::evaluate_exit(&report, min_score);
    if output_json {
        let json_report = JsonReport::new(&report, min_score);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        report::print_human(&report, &exit);
    }

    if exit.ok() { Ok(0) } else { Ok(1) }
}

fn run_vocab(args: VocabArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    let vocabulary = loaded.config.vocabulary.build()?;

    if args.json || loaded.config.general.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&VocabularyJson::from(&vocabulary))?
        );
    } else {
        report::print_vocabulary(&vocabulary);
    }

    Ok(0)
}

fn resolve_source(cwd: &Path, path: &PathBuf) -> PathBuf {
    if path.as_os_str() == utils::fs::STDIN_MARKER || path.is_absolute() {
        path.clone()
    } else {
        cwd.join(path)
    }
}
