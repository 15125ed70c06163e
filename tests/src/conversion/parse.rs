use ouiconv_common::{RegistryError, VendorRecord};
use ouiconv_core::{InvalidGroupPolicy, RegistryParser};

use crate::util::fixture;

#[test]
fn sample_registry_in_file_order() {
    let records = RegistryParser::default()
        .parse_file(&fixture("oui_sample.txt"))
        .expect("sample registry should parse");

    let hexes: Vec<&str> = records.iter().map(|r| r.hex.as_str()).collect();
    assert_eq!(hexes, ["00-22-72", "00-D0-EF", "08-61-95", "F4-BD-9E", "5C-F2-86"]);

    assert_eq!(
        records[0],
        VendorRecord {
            hex: "00-22-72".into(),
            base16: "002272".into(),
            company: "American Micro-Fuel Device Corp.".into(),
            address: Some("2181 Buchanan Loop".into()),
            address2: Some("Ferndale  WA  98248".into()),
            country: Some("US".into()),
        }
    );

    let private = records.last().unwrap();
    assert_eq!(private.company, "Private");
    assert_eq!(private.base16, "5CF286");
    assert!(!private.has_address());
}

#[test]
fn header_block_is_not_a_record() {
    let records = RegistryParser::default()
        .parse_file(&fixture("oui_sample.txt"))
        .unwrap();

    assert!(records.iter().all(|r| !r.hex.starts_with("OUI/MA-L")));
    assert!(records.iter().all(|r| r.company != "Organization"));
}

#[test]
fn trailing_group_without_final_blank_line() {
    let records = RegistryParser::default()
        .parse_file(&fixture("oui_no_trailing_blank.txt"))
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        VendorRecord {
            hex: "AC-DE-48".into(),
            base16: "ACDE48".into(),
            company: "Company A".into(),
            address: Some("1 Main St".into()),
            address2: Some("Suite 2".into()),
            country: Some("Wonderland".into()),
        }
    );
    assert_eq!(records[1].hex, "00-00-02");
    assert_eq!(records[1].address, None);
}

#[test]
fn invalid_registry_aborts_on_first_bad_group() {
    let err = RegistryParser::default()
        .parse_file(&fixture("oui_invalid.txt"))
        .unwrap_err();

    match err {
        RegistryError::CompanyMismatch { group, line, first, second } => {
            assert_eq!(group, 2);
            assert_eq!(line, 8);
            assert_eq!(first, "First Name");
            assert_eq!(second, "Second Name");
        }
        other => panic!("expected a company mismatch, got: {other}"),
    }
}

#[test]
fn invalid_registry_with_skip_policy() {
    let records = RegistryParser::new(InvalidGroupPolicy::Skip)
        .parse_file(&fixture("oui_invalid.txt"))
        .unwrap();

    let companies: Vec<&str> = records.iter().map(|r| r.company.as_str()).collect();
    assert_eq!(companies, ["Good Vendor", "Last Vendor"]);
    assert_eq!(records[1].country.as_deref(), Some("NZ"));
}

#[test]
fn crlf_registry_matches_lf_registry() {
    let lf = RegistryParser::default()
        .parse_file(&fixture("oui_sample.txt"))
        .unwrap();
    let crlf = RegistryParser::default()
        .parse_file(&fixture("oui_sample_crlf.txt"))
        .expect("CRLF registry should parse");

    assert_eq!(crlf.len(), 5);
    assert_eq!(crlf, lf);
}
