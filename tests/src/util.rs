use std::path::PathBuf;

use ouiconv_common::config::Config;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

/// A config reading `fixture`, writing both outputs into `out_dir`.
pub fn config(fixture_name: &str, out_dir: &std::path::Path) -> Config {
    let mut cfg = Config::new(fixture(fixture_name));
    cfg.json = Some(out_dir.join("oui.json"));
    cfg.csv = Some(out_dir.join("oui.csv"));
    cfg
}
