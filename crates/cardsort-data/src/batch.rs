//! Extracts every board export in a directory.

use std::path::Path;

use cardsort_core::error::{Result, SortError};
use cardsort_core::models::{CardMapping, Sort};
use tracing::{debug, info};

use crate::extractor::parse_board;
use crate::reader::scan_json_files;

/// Extract the [`Sort`] stored in a single export file.
///
/// Failing to open or read the file is a [`SortError::FileRead`]; any later
/// failure is reported with the file's path attached.
pub fn parse_board_file(path: &Path, mapping: Option<&CardMapping>) -> Result<Sort> {
    let content = std::fs::read(path).map_err(|source| SortError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let sort = parse_board(&content, mapping).map_err(|err| err.in_file(path))?;
    debug!(
        "Parsed {}: \"{}\" with groups {:?}",
        path.display(),
        sort.name,
        sort.group_names()
    );
    Ok(sort)
}

/// Extract a [`Sort`] from every `.json` file directly inside `dir`.
///
/// Results follow directory order. The first file that fails aborts the
/// whole batch.
pub fn parse_sorts_in_dir(dir: &Path, mapping: Option<&CardMapping>) -> Result<Vec<Sort>> {
    let mut sorts = Vec::new();
    for path in scan_json_files(dir) {
        let path = path?;
        sorts.push(parse_board_file(&path, mapping)?);
    }

    info!("Extracted {} sorts from {}", sorts.len(), dir.display());
    Ok(sorts)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
