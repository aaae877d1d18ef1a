use std::path::{Path, PathBuf};

use crate::domain::ExhibitorRecord;

#[derive(Debug, thiserror::Error)]
#[error("failed to write exhibitors to {path}")]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: csv::Error,
}

/// Writes the records as one CSV table with a header row. Returns the number
/// of rows written.
pub fn write_records(records: &[ExhibitorRecord], path: &Path) -> Result<usize, ExportError> {
    let to_export_error = |source: csv::Error| ExportError {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_export_error)?;
    for record in records {
        writer.serialize(record).map_err(to_export_error)?;
    }
    writer
        .flush()
        .map_err(|e| to_export_error(csv::Error::from(e)))?;

    Ok(records.len())
}
