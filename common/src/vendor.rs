use serde::{Deserialize, Serialize};

/// One vendor assignment as listed in the registry.
///
/// Field order is the output order: JSON keys and CSV columns both follow
/// the declaration below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    /// Dash separated prefix as written in the registry, e.g. `AC-DE-48`.
    pub hex: String,
    /// The same prefix without separators, e.g. `ACDE48`.
    pub base16: String,
    pub company: String,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub country: Option<String>,
}

/// Column names in output order.
pub const FIELDS: [&str; 6] = ["hex", "base16", "company", "address", "address2", "country"];

impl VendorRecord {
    /// True when the registry listed a postal address for the vendor.
    pub fn has_address(&self) -> bool {
        self.address.is_some() || self.address2.is_some() || self.country.is_some()
    }
}
