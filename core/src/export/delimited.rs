use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::export::ExportError;
use crate::report::SummaryRow;

/// Serializes the header and the single data row with unformatted values.
pub fn write<W: Write>(row: &SummaryRow, writer: W) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    wtr.serialize(row)?;
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn to_bytes(row: &SummaryRow) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write(row, &mut buf)?;
    Ok(buf)
}

pub fn write_file(row: &SummaryRow, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write(row, file)?;
    info!("Saved CSV to {}", path.display());
    Ok(())
}
