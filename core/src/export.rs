//! The **output writer**: serializes parsed records to the destinations a
//! run asked for.

use std::path::{Path, PathBuf};

use ouiconv_common::config::Config;
use ouiconv_common::{print, RegistryError, VendorRecord};
use tracing::debug;

mod csv_file;
mod json_file;

pub use csv_file::CsvExporter;
pub use json_file::JsonExporter;

/// A destination for the full, ordered list of records.
pub trait RecordExporter {
    /// File the records are written to.
    fn destination(&self) -> &Path;

    /// Writes every record, replacing the destination if it exists.
    fn export(&self, records: &[VendorRecord]) -> Result<(), RegistryError>;
}

/// Builds the exporters requested by `cfg`, JSON first.
pub fn exporters(cfg: &Config) -> Vec<Box<dyn RecordExporter>> {
    let mut exporters: Vec<Box<dyn RecordExporter>> = Vec::new();

    if let Some(path) = &cfg.json {
        exporters.push(Box::new(JsonExporter::new(path).pretty(cfg.pretty)));
    }
    if let Some(path) = &cfg.csv {
        exporters.push(Box::new(CsvExporter::new(path)));
    }

    exporters
}

/// Writes `records` to every configured destination and returns the paths
/// written. Does nothing when no output was requested.
pub fn export_all(records: &[VendorRecord], cfg: &Config) -> Result<Vec<PathBuf>, RegistryError> {
    let mut written: Vec<PathBuf> = Vec::new();

    for exporter in exporters(cfg) {
        debug!("writing {} records to {}", records.len(), exporter.destination().display());
        exporter.export(records)?;
        print::output_written(exporter.destination());
        written.push(exporter.destination().to_path_buf());
    }

    Ok(written)
}
