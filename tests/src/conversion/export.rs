use std::fs;

use ouiconv_common::VendorRecord;
use ouiconv_core::{export_all, RegistryParser};

use crate::util::config;

fn run(fixture_name: &str, out_dir: &std::path::Path) -> anyhow::Result<Vec<VendorRecord>> {
    let cfg = config(fixture_name, out_dir);
    let records = RegistryParser::from_config(&cfg).parse_file(&cfg.input)?;
    let written = export_all(&records, &cfg)?;
    assert_eq!(written, [out_dir.join("oui.json"), out_dir.join("oui.csv")]);
    Ok(records)
}

#[test]
fn json_output_matches_records() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let records = run("oui_no_trailing_blank.txt", dir.path())?;

    let text = fs::read_to_string(dir.path().join("oui.json"))?;
    assert_eq!(
        text,
        concat!(
            r#"[{"hex":"AC-DE-48","base16":"ACDE48","company":"Company A","address":"1 Main St","address2":"Suite 2","country":"Wonderland"},"#,
            r#"{"hex":"00-00-02","base16":"000002","company":"Private","address":null,"address2":null,"country":null}]"#
        )
    );

    let parsed: Vec<VendorRecord> = serde_json::from_str(&text)?;
    assert_eq!(parsed, records);
    Ok(())
}

#[test]
fn json_output_is_idempotent() -> anyhow::Result<()> {
    let first = tempfile::tempdir()?;
    let second = tempfile::tempdir()?;

    run("oui_sample.txt", first.path())?;
    run("oui_sample.txt", second.path())?;

    let a = fs::read(first.path().join("oui.json"))?;
    let b = fs::read(second.path().join("oui.json"))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn csv_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let records = run("oui_sample.txt", dir.path())?;

    let mut reader = csv::Reader::from_path(dir.path().join("oui.csv"))?;
    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    assert_eq!(headers, ["hex", "base16", "company", "address", "address2", "country"]);

    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), records.len());

    for (row, record) in rows.iter().zip(&records) {
        assert_eq!(&row[0], record.hex);
        assert_eq!(&row[1], record.base16);
        assert_eq!(&row[2], record.company);
        assert_eq!(&row[3], record.address.as_deref().unwrap_or(""));
        assert_eq!(&row[4], record.address2.as_deref().unwrap_or(""));
        assert_eq!(&row[5], record.country.as_deref().unwrap_or(""));
    }

    // "Cisco Systems, Inc" must survive the embedded comma
    assert!(rows.iter().any(|row| &row[2] == "Cisco Systems, Inc"));
    Ok(())
}

#[test]
fn no_destinations_writes_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut cfg = config("oui_sample.txt", dir.path());
    cfg.json = None;
    cfg.csv = None;

    let records = RegistryParser::from_config(&cfg).parse_file(&cfg.input)?;
    assert!(export_all(&records, &cfg)?.is_empty());
    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}
