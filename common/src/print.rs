//! Console output routed through `tracing`, so that whatever subscriber the
//! binary installs decides how (and whether) a line is shown.

/// Target of raw console lines. Formatters print these without a status marker.
pub const PRINT_TARGET: &str = "ouiconv::print";

/// Field carrying the raw console line.
pub const RAW_FIELD: &str = "raw_msg";

pub fn print(msg: &str) {
    tracing::info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Reports one parsed group: zero padded group index and line number,
/// followed by the hex prefix and the company.
pub fn group_line(group: usize, line: usize, hex: &str, company: &str) {
    print(&format!("{group:03} {line:03} {hex} {company}"));
}

/// Confirms that an output file has been written.
pub fn output_written(path: &std::path::Path) {
    print(&format!("Output {}", path.display()));
}
