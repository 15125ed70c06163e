//! The **group scanner** for vendor registry dumps.
//!
//! A registry is a line oriented text file. Lines are collected into groups
//! separated by blank lines; the first group is the file header and is
//! dropped, every other group is handed to [`extract::extract_record`].
//!
//! Lines end in `\n` or `\r\n`; the terminator is dropped before a line is
//! looked at. A line is blank only when nothing is left, so whitespace-only
//! lines belong to the surrounding group.

use std::fs;
use std::path::Path;

use ouiconv_common::config::Config;
use ouiconv_common::{print, success, warn, RegistryError, VendorRecord};
use tracing::{debug, trace};

mod extract;

pub use extract::extract_record;

/// What to do with a group that cannot be turned into a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidGroupPolicy {
    /// Stop at the first bad group and return its error.
    #[default]
    Abort,
    /// Report the bad group and continue with the next one.
    Skip,
}

#[derive(Clone, Debug, Default)]
pub struct RegistryParser {
    policy: InvalidGroupPolicy,
}

impl RegistryParser {
    pub fn new(policy: InvalidGroupPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let policy = match cfg.skip_invalid {
            true => InvalidGroupPolicy::Skip,
            false => InvalidGroupPolicy::Abort,
        };
        Self::new(policy)
    }

    /// Reads the whole registry into memory and parses it.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<VendorRecord>, RegistryError> {
        let text: String = fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        debug!("read {} bytes from {}", text.len(), path.display());
        self.parse_str(&text)
    }

    /// Parses registry text into records, in file order.
    pub fn parse_str(&self, text: &str) -> Result<Vec<VendorRecord>, RegistryError> {
        let mut scan: Scan = Scan::new(self.policy);
        let mut line_no: usize = 0;

        for line in text.lines() {
            line_no += 1;
            if is_blank(line) {
                scan.close_group(line_no)?;
            } else {
                trace!(line_no, "buffering line");
                scan.lines.push(line);
            }
        }

        // the last group may not be followed by a blank line
        if !scan.lines.is_empty() {
            scan.accept(line_no)?;
        }

        Ok(scan.finish())
    }
}

/// `line` has already lost its `\n` or `\r\n` terminator.
fn is_blank(line: &str) -> bool {
    line.is_empty()
}

/// Scanner state for one pass over a registry.
struct Scan<'a> {
    policy: InvalidGroupPolicy,
    group_no: usize,
    lines: Vec<&'a str>,
    records: Vec<VendorRecord>,
    skipped: usize,
}

impl<'a> Scan<'a> {
    fn new(policy: InvalidGroupPolicy) -> Self {
        Self {
            policy,
            group_no: 0,
            lines: Vec::new(),
            records: Vec::new(),
            skipped: 0,
        }
    }

    /// Handles a blank line: parses the buffered group (or drops the header)
    /// and starts the next group.
    fn close_group(&mut self, line_no: usize) -> Result<(), RegistryError> {
        if self.group_no == 0 {
            debug!(lines = self.lines.len(), "discarding header block");
        } else if self.lines.is_empty() {
            trace!(line_no, "consecutive blank line");
        } else {
            self.accept(line_no)?;
        }

        self.group_no += 1;
        self.lines.clear();
        Ok(())
    }

    fn accept(&mut self, line_no: usize) -> Result<(), RegistryError> {
        match extract_record(&self.lines, self.group_no, line_no) {
            Ok(record) => {
                print::group_line(self.group_no, line_no, &record.hex, &record.company);
                self.records.push(record);
                Ok(())
            }
            Err(err) if self.policy == InvalidGroupPolicy::Skip && err.is_group_error() => {
                warn!("Skipping {err}");
                self.skipped += 1;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn finish(self) -> Vec<VendorRecord> {
        if self.skipped > 0 {
            warn!("{} invalid group(s) skipped", self.skipped);
        }
        success!("Parsed {} records", self.records.len());
        self.records
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
