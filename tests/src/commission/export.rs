use std::fs;

use commcalc_common::input::CommissionInput;
use commcalc_core::SummaryRow;
use commcalc_core::export::ExportFormat;
use commcalc_core::report::COLUMNS;

fn row() -> SummaryRow {
    SummaryRow::compute(&CommissionInput::new(10.0, 20.0, 300.0).unwrap())
}

#[test]
fn csv_export_is_one_header_and_one_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(ExportFormat::Csv.default_file_name());

    ExportFormat::Csv.write(&row(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], COLUMNS.join(","));
    assert_eq!(lines[1], "10.0,20.0,300.0,12900.0,4.75,2.0,870.75");
}

#[test]
fn xlsx_export_creates_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(ExportFormat::Xlsx.default_file_name());

    ExportFormat::Xlsx.write(&row(), &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"), "xlsx files are zip archives");
}

#[test]
fn export_to_missing_directory_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("out.csv");

    let result = ExportFormat::Csv.write(&row(), &path);
    assert!(result.is_err());
    Ok(())
}
