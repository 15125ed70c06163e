use std::path::{Path, PathBuf};

use ouiconv_common::vendor::FIELDS;
use ouiconv_common::{RegistryError, VendorRecord};

use super::RecordExporter;

/// Writes the records as a CSV table with a fixed six column header.
///
/// The header is written even when there are no records. Absent address
/// fields are empty cells.
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn csv_error(&self, source: csv::Error) -> RegistryError {
        RegistryError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordExporter for CsvExporter {
    fn destination(&self) -> &Path {
        &self.path
    }

    fn export(&self, records: &[VendorRecord]) -> Result<(), RegistryError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;

        writer.write_record(FIELDS).map_err(|e| self.csv_error(e))?;
        for record in records {
            writer.serialize(record).map_err(|e| self.csv_error(e))?;
        }

        writer.flush().map_err(|e| RegistryError::io(&self.path, e))
    }
}
