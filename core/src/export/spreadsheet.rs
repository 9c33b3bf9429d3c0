use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::export::ExportError;
use crate::report::{COLUMN_KINDS, COLUMNS, ColumnKind, SummaryRow};

pub const SHEET_NAME: &str = "Summary";
pub const MONEY_FORMAT: &str = "$#,##0.00";
pub const PERCENT_FORMAT: &str = "0.00%";

/// Builds the workbook in memory.
///
/// Percent columns store the fraction (16 becomes 0.16) so that Excel's `%`
/// format shows the same figure as the terminal table.
pub fn build(row: &SummaryRow) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    fill(worksheet, row)?;
    Ok(workbook)
}

/// Number format applied to a data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Money,
    Percent,
}

impl CellStyle {
    pub fn num_format(self) -> Option<&'static str> {
        match self {
            CellStyle::Plain => None,
            CellStyle::Money => Some(MONEY_FORMAT),
            CellStyle::Percent => Some(PERCENT_FORMAT),
        }
    }
}

/// The value stored in the data row and the style it is written with.
///
/// Percent columns store the fraction. Only the derived dollar amounts get
/// the money format; the weekly input is left as entered.
pub fn cell(name: &str, kind: ColumnKind, value: f64) -> (f64, CellStyle) {
    match kind {
        ColumnKind::Percent => (value / 100.0, CellStyle::Percent),
        ColumnKind::Currency if is_money_column(name) => (value, CellStyle::Money),
        _ => (value, CellStyle::Plain),
    }
}

fn fill(worksheet: &mut Worksheet, row: &SummaryRow) -> Result<(), XlsxError> {
    let header = Format::new().set_bold();

    for (col, ((name, kind), value)) in COLUMNS
        .iter()
        .zip(COLUMN_KINDS)
        .zip(row.values())
        .enumerate()
    {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *name, &header)?;
        let (stored, style) = cell(name, kind, value);
        match style.num_format() {
            Some(num_format) => {
                let format = Format::new().set_num_format(num_format);
                worksheet.write_number_with_format(1, col, stored, &format)?;
            }
            None => {
                worksheet.write_number(1, col, stored)?;
            }
        }
        worksheet.set_column_width(col, column_width(name, value))?;
    }
    Ok(())
}

fn is_money_column(name: &str) -> bool {
    matches!(name, "Monthly GP ($)" | "Monthly Commission ($)")
}

fn column_width(name: &str, value: f64) -> f64 {
    let value_len = format!("{value:?}").len();
    (value_len.max(name.len()) + 2) as f64
}

pub fn to_bytes(row: &SummaryRow) -> Result<Vec<u8>, ExportError> {
    let mut workbook = build(row)?;
    Ok(workbook.save_to_buffer()?)
}

pub fn write_file(row: &SummaryRow, path: &Path) -> Result<(), ExportError> {
    let mut workbook = build(row)?;
    workbook.save(path)?;
    info!("Saved spreadsheet to {}", path.display());
    Ok(())
}
