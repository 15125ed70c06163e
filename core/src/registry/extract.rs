//! Turns the lines of one registry group into a [`VendorRecord`].
//!
//! Layout of a group:
//!
//! ```text
//! AC-DE-48   (hex)\t\tCompany A
//! ACDE48     (base16)\t\tCompany A
//! 1 Main St            <- optional, together with the next two lines
//! Suite 2
//! Wonderland
//! ```

use ouiconv_common::{RegistryError, VendorRecord};
use tracing::trace;

/// Builds a record from the lines of group `group`, closed at line `line`.
///
/// Groups of exactly 2 lines have no address. Groups of 5 or more lines
/// carry address, second address line and country in lines 3 to 5; any
/// further lines are ignored. Every other length is an
/// [`RegistryError::IncompleteGroup`].
pub fn extract_record(
    lines: &[&str],
    group: usize,
    line: usize,
) -> Result<VendorRecord, RegistryError> {
    let incomplete = || RegistryError::IncompleteGroup {
        group,
        line,
        found: lines.len(),
    };

    let [first, second, rest @ ..] = lines else {
        return Err(incomplete());
    };

    let (hex, company) = split_assignment(first);
    let (base16, company2) = split_assignment(second);

    if company != company2 {
        return Err(RegistryError::CompanyMismatch {
            group,
            line,
            first: company.to_string(),
            second: company2.to_string(),
        });
    }

    let (address, address2, country) = match rest {
        [] => (None, None, None),
        [address, address2, country, extra @ ..] => {
            if !extra.is_empty() {
                trace!(group, ignored = extra.len(), "extra lines after country");
            }
            (
                Some(address.trim().to_string()),
                Some(address2.trim().to_string()),
                Some(country.trim().to_string()),
            )
        }
        _ => return Err(incomplete()),
    };

    Ok(VendorRecord {
        hex: hex.to_string(),
        base16: base16.to_string(),
        company: company.to_string(),
        address,
        address2,
        country,
    })
}

/// Splits an assignment line into its prefix and its company.
///
/// The prefix is the first space separated token of the first tab field,
/// the company is the last tab field with surrounding whitespace removed.
fn split_assignment(line: &str) -> (&str, &str) {
    let line = line.trim_end_matches(['\n', '\r']);

    let prefix = line
        .split('\t')
        .next()
        .and_then(|field| field.split(' ').next())
        .unwrap_or_default();
    let company = line.rsplit('\t').next().unwrap_or_default().trim();

    (prefix, company)
}
