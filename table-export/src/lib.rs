#![warn(clippy::all, rust_2018_idioms)]

//! Writes the table of digitized points to a file.
//!
//! Every format has the same three columns, `Point` (1-based index), `X` and
//! `Y`, and one row per point. Values are written with full precision.

mod csv;
mod json;
mod xlsx;

use std::path::Path;

use plot_calibration::TableRow;
use thiserror::Error;

pub use csv::to_csv_string;
pub use json::to_json_string;
pub use xlsx::to_xlsx_buffer;

/// File name proposed when exporting.
pub const DEFAULT_FILE_NAME: &str = "plot_data.xlsx";
/// Name of the worksheet holding the points.
pub const SHEET_NAME: &str = "Plot Data";
/// Column headers, in order.
pub const COLUMNS: [&str; 3] = ["Point", "X", "Y"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not create spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("could not serialize points: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick the format from the file extension. Unknown or missing extensions
    /// fall back to a spreadsheet.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("csv") => Self::Csv,
            Some("json") => Self::Json,
            Some("xlsx") => Self::Xlsx,
            other => {
                log::debug!("unknown export extension {:?}, writing xlsx", other);
                Self::Xlsx
            }
        }
    }

    pub fn render(&self, rows: &[TableRow]) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Xlsx => to_xlsx_buffer(rows),
            ExportFormat::Csv => Ok(to_csv_string(rows).into_bytes()),
            ExportFormat::Json => Ok(to_json_string(rows)?.into_bytes()),
        }
    }
}

/// Write `rows` to `path` in the format matching its extension.
pub fn write_table(rows: &[TableRow], path: &Path) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path);
    log::debug!("exporting {} rows as {:?} to {:?}", rows.len(), format, path);
    let bytes = format.render(rows)?;
    std::fs::write(path, bytes)?;
    log::info!("exported {} points to {:?}", rows.len(), path);
    Ok(format)
}

#[cfg(test)]
pub(crate) fn sample_rows() -> Vec<TableRow> {
    vec![
        TableRow {
            index: 1,
            x: 0.5,
            y: 31.622776601683793,
        },
        TableRow {
            index: 2,
            x: -2.0,
            y: 1e-3,
        },
    ]
}
