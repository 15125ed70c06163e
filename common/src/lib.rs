//! Types shared by the `ouiconv` crates: the vendor record, the error
//! taxonomy, run configuration and console printing.

mod macros;

pub mod config;
pub mod error;
pub mod print;
pub mod vendor;

pub use error::RegistryError;
pub use vendor::VendorRecord;
