use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use crate::errors::ExtractorError;
use crate::models::{ExportRow, EXPORT_HEADER};
use tracing::info;

/// Append-only CSV sink. Every row is written through a freshly opened handle
/// that is flushed and closed before `append` returns, so rows already
/// written survive a crash or interruption later in the run.
///
/// File I/O here is blocking `std::fs` and contains no await point: a
/// cancelled run stops between rows, never inside one. Rows are a few hundred
/// bytes each, so the runtime thread is held only briefly.
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    /// Create (or truncate) the output file and write the header row.
    pub fn create(path: &Path) -> Result<Self, ExtractorError> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(EXPORT_HEADER)?;
        writer.flush()?;
        info!(path = %path.display(), "Initialized CSV file");
        Ok(Self { path: path.to_path_buf() })
    }

    /// Append one row: open, write, flush, close.
    pub fn append(&self, row: &ExportRow) -> Result<(), ExtractorError> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(row)?;
        writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
