pub mod report;
pub mod score;
pub mod vocabulary;

use crate::config::Config;
use crate::core::score::Scan;
use crate::utils::fs as fs_utils;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Reads the document at `source`, then scores it against the configured vocabulary.
pub fn run_scan(source: &Path, cfg: &Config) -> Result<Scan> {
    let vocabulary = cfg.vocabulary.build()?;
    let text = fs_utils::read_document(source, &cfg.intake)?;
    let scan = score::score(&text, &vocabulary);

    match &scan {
        Scan::NoText => info!(source = %source.display(), "no text in document"),
        Scan::Scored(report) => info!(
            source = %source.display(),
            percentage = report.aggregate_percentage,
            matched = report.matched_count,
            "document scored"
        ),
    }

    Ok(scan)
}
