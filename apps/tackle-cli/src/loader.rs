//! Batch loading of hire rows from a test-data file.
//!
//! Bad rows are skipped and reported; good rows are recorded in file order,
//! so customer IDs follow the order of the accepted rows.

use std::fs;
use std::path::Path;

use tackle_core::ingest::{is_skippable, parse_hire_row};
use tackle_core::{CoreError, HireLedger};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Outcome of one load.
#[derive(Debug, Default)]
pub struct LoadSummary {
    /// Hires added to the ledger.
    pub loaded: usize,
    /// One `InvalidRow` per skipped line.
    pub rejected: Vec<CoreError>,
}

/// Reads `path` and records every valid hire row into `ledger`.
pub fn load_hires(path: &Path, ledger: &mut HireLedger) -> AppResult<LoadSummary> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = load_from_str(&text, ledger);
    info!(
        path = %path.display(),
        loaded = summary.loaded,
        rejected = summary.rejected.len(),
        "Hire data loaded"
    );
    Ok(summary)
}

/// Records every valid hire row in `text`. Line numbers are 1-based.
pub fn load_from_str(text: &str, ledger: &mut HireLedger) -> LoadSummary {
    let mut summary = LoadSummary::default();

    for (index, line) in text.lines().enumerate() {
        if is_skippable(line) {
            continue;
        }
        let line_no = index + 1;
        let outcome = parse_hire_row(line).and_then(|request| ledger.record(request).map(|_| ()));
        match outcome {
            Ok(()) => summary.loaded += 1,
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping hire row");
                summary.rejected.push(CoreError::InvalidRow {
                    line: line_no,
                    reason: e.to_string(),
                });
            }
        }
    }

    summary
}
