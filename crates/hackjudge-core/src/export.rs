//! Report files on disk
//!
//! Reports are written as `<stem>.txt` (human layout) and, when a grid is
//! available, `<stem>.csv` next to it. Directories are created on demand.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HackError, Result};
use crate::table::Table;

/// Write `text` and optionally `table` under `dir`; returns written paths
pub fn write_report(dir: &Path, stem: &str, text: &str, table: Option<&Table>) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| HackError::io_operation("create directory", dir.display(), e))?;

    let txt_path = dir.join(format!("{stem}.txt"));
    fs::write(&txt_path, text).map_err(|e| HackError::io_operation("write", txt_path.display(), e))?;
    let mut written = vec![txt_path];

    if let Some(table) = table {
        let csv_path = dir.join(format!("{stem}.csv"));
        table.write_csv_path(&csv_path)?;
        written.push(csv_path);
    }

    debug!(dir = %dir.display(), stem, files = written.len(), "report_written");
    Ok(written)
}

/// Write only a CSV grid under `dir`
pub fn write_csv(dir: &Path, stem: &str, table: &Table) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| HackError::io_operation("create directory", dir.display(), e))?;
    let path = dir.join(format!("{stem}.csv"));
    table.write_csv_path(&path)?;
    Ok(path)
}
