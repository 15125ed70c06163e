use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ouiconv_common::{RegistryError, VendorRecord};

use super::RecordExporter;

/// Writes the records as a single JSON array of objects.
///
/// Absent address fields are written as `null`.
pub struct JsonExporter {
    path: PathBuf,
    pretty: bool,
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl RecordExporter for JsonExporter {
    fn destination(&self) -> &Path {
        &self.path
    }

    fn export(&self, records: &[VendorRecord]) -> Result<(), RegistryError> {
        let file: File = File::create(&self.path).map_err(|e| RegistryError::io(&self.path, e))?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        let result = match self.pretty {
            true => serde_json::to_writer_pretty(&mut writer, records),
            false => serde_json::to_writer(&mut writer, records),
        };
        result.map_err(|source| RegistryError::Json {
            path: self.path.clone(),
            source,
        })?;

        writer.flush().map_err(|e| RegistryError::io(&self.path, e))
    }
}
