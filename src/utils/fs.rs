use crate::config::IntakeConfig;
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Path argument that means "read the document from stdin".
pub const STDIN_MARKER: &str = "-";

pub fn is_likely_binary(bytes: &[u8]) -> bool {
    let sample_len = bytes.len().min(8192);
    bytes[..sample_len].contains(&0)
}

/// Reads an already-extracted text document. Blank content is returned as-is;
/// deciding what "no text" means is left to the scorer.
pub fn read_document(source: &Path, cfg: &IntakeConfig) -> Result<String> {
    let max_bytes = max_bytes(cfg);
    let bytes = if source.as_os_str() == STDIN_MARKER {
        read_limited(std::io::stdin(), max_bytes)
            .context("failed reading document from stdin")?
    } else {
        read_file(source, cfg)?
    };

    if bytes.len() as u64 > max_bytes {
        bail!(
            "document is larger than max_file_size_kb ({} KB)",
            cfg.max_file_size_kb
        );
    }
    if is_likely_binary(&bytes) {
        bail!(
            "{} looks like binary data; extract its text first (e.g. pdftotext)",
            source.display()
        );
    }

    debug!(bytes = bytes.len(), source = %source.display(), "read document");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_file(path: &Path, cfg: &IntakeConfig) -> Result<Vec<u8>> {
    if !path.exists() {
        bail!("document not found: {}", path.display());
    }
    if !path.is_file() {
        bail!("document path is not a file: {}", path.display());
    }
    if !has_accepted_extension(path, &cfg.accepted_extensions) {
        bail!(
            "unsupported document type: {} (accepted: {})",
            path.display(),
            cfg.accepted_extensions.join(", ")
        );
    }

    let metadata =
        fs::metadata(path).with_context(|| format!("failed reading {}", path.display()))?;
    if metadata.len() > max_bytes(cfg) {
        bail!(
            "{} is larger than max_file_size_kb ({} KB)",
            path.display(),
            cfg.max_file_size_kb
        );
    }

    fs::read(path).with_context(|| format!("failed reading {}", path.display()))
}

fn max_bytes(cfg: &IntakeConfig) -> u64 {
    cfg.max_file_size_kb.saturating_mul(1024)
}

/// Reads at most one byte past `max_bytes`, enough to tell that the limit was hit.
fn read_limited<R: Read>(reader: R, max_bytes: u64) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut buf)?;
    Ok(buf)
}

fn has_accepted_extension(path: &Path, accepted: &[String]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy();
    accepted
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(&ext))
}
