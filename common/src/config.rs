use std::path::PathBuf;

/// Resolved settings for a single conversion run.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Registry text file to parse.
    pub input: PathBuf,

    /// Destination of the JSON array, if requested.
    pub json: Option<PathBuf>,

    /// Destination of the CSV table, if requested.
    pub csv: Option<PathBuf>,

    /// Pretty-print the JSON output instead of writing it compact.
    pub pretty: bool,

    /// Drop malformed or inconsistent groups instead of aborting the run.
    ///
    /// Every skipped group is still reported at warn level.
    pub skip_invalid: bool,

    /// Number of `-v` flags given on the command line.
    pub verbosity: u8,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// True when at least one output file was requested.
    pub fn has_outputs(&self) -> bool {
        self.json.is_some() || self.csv.is_some()
    }
}
