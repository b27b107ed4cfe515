//! Export log configuration

use std::path::PathBuf;

/// Directory the look log is written under (created on first save)
pub const EXPORTS_DIR: &str = "exports";

/// Filename of the append-only look log
pub const LOOKS_CSV_FILENAME: &str = "looks.csv";

/// Relative path of the look log, e.g. "exports/looks.csv"
pub fn looks_csv_path() -> PathBuf {
    PathBuf::from(EXPORTS_DIR).join(LOOKS_CSV_FILENAME)
}
