//! File exports of the summary row.
//!
//! * [`delimited`]: CSV with raw values.
//! * [`spreadsheet`]: XLSX with per-column number formats.

pub mod delimited;
pub mod spreadsheet;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::SummaryRow;

pub const DEFAULT_CSV_NAME: &str = "commission_result.csv";
pub const DEFAULT_XLSX_NAME: &str = "commission_result.xlsx";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error writing '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => DEFAULT_CSV_NAME,
            ExportFormat::Xlsx => DEFAULT_XLSX_NAME,
        }
    }

    pub fn write(self, row: &SummaryRow, path: &Path) -> Result<(), ExportError> {
        match self {
            ExportFormat::Csv => delimited::write_file(row, path),
            ExportFormat::Xlsx => spreadsheet::write_file(row, path),
        }
    }
}
