//! # ouiconv core
//!
//! * **[`registry`]**: scans a vendor registry dump into [`VendorRecord`]s.
//! * **[`export`]**: writes the records out as JSON and CSV.
//!
//! [`VendorRecord`]: ouiconv_common::VendorRecord

pub mod export;
pub mod registry;

pub use export::{export_all, CsvExporter, JsonExporter, RecordExporter};
pub use registry::{InvalidGroupPolicy, RegistryParser};
