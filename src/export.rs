//! CSV export of distribution results.
//!
//! Produces the spreadsheet-compatible file the workflow ends with: UTF-8
//! with a leading byte-order mark so spreadsheet applications detect the
//! encoding, a Korean header row, then one row per student in group order.
//! Student name and trait summary are always quoted with embedded quotes
//! doubled; the summary lists difficulty labels first, then helper labels,
//! in the student's own order. References to attributes missing from the
//! catalog are omitted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::info;

use crate::models::{AttributeCatalog, Group};

/// Byte-order mark prepended for spreadsheet compatibility.
const BOM: char = '\u{feff}';
/// Header row: class, student name, trait summary.
const HEADER: &str = "반,학생 이름,특성 요약";
/// Export file name prefix.
const FILE_PREFIX: &str = "반배정결과";

/// Export failure.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the CSV file failed.
    #[error("failed to write {path}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Serializes groups to CSV text.
pub fn groups_to_csv(groups: &[Group], catalog: &AttributeCatalog) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(HEADER);
    out.push('\n');

    for group in groups {
        for student in &group.students {
            let summary = catalog.student_labels(student).join(", ");
            out.push_str(&group.name);
            out.push(',');
            out.push_str(&quoted(&student.name));
            out.push(',');
            out.push_str(&quoted(&summary));
            out.push('\n');
        }
    }

    out
}

/// Quotes a field, doubling embedded quote characters.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// File name for an export dated `date`: `반배정결과_YYYY-MM-DD.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("{FILE_PREFIX}_{}.csv", date.format("%Y-%m-%d"))
}

/// File name for an export dated today (UTC).
pub fn default_export_filename() -> String {
    export_filename(Utc::now().date_naive())
}

/// Writes the CSV for `groups` to `path`.
pub fn write_csv(
    path: impl AsRef<Path>,
    groups: &[Group],
    catalog: &AttributeCatalog,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    fs::write(path, groups_to_csv(groups, catalog)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), groups = groups.len(), "exported distribution");
    Ok(())
}
