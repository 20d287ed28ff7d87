//! Path and directory management.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use crate::error::Result;

/// Folder name for the month containing `date`, e.g. `2024-03`.
pub fn month_folder_name(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Get the folder for the month containing `date`.
///
/// Depends only on the year and month; the day is ignored.
pub fn month_folder_path(output_dir: &Path, date: NaiveDate) -> PathBuf {
    output_dir.join(month_folder_name(date))
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
