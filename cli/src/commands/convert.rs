use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use ouiconv_common::config::Config;
use ouiconv_common::{VendorRecord, warn};
use ouiconv_core::{RegistryParser, export_all};

use crate::terminal::{colors, print};

/// Parses the configured registry and writes every requested output.
pub fn convert(cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let records: Vec<VendorRecord> = RegistryParser::from_config(cfg)
        .parse_file(&cfg.input)
        .with_context(|| format!("failed to parse {}", cfg.input.display()))?;

    if !cfg.has_outputs() {
        warn!("No --json or --csv destination given, nothing written");
    }

    export_all(&records, cfg).context("failed to write output")?;

    print_summary(records.len(), start_time.elapsed(), cfg);
    Ok(())
}

fn print_summary(records_len: usize, total_time: Duration, cfg: &Config) {
    if cfg.verbosity == 0 {
        return;
    }

    let records: ColoredString = format!("{records_len} vendor records").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Conversion Complete: {records} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    print::fat_separator();
    print::centerln(&output);
}
