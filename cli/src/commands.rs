pub mod convert;

use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use ouiconv_common::config::Config;

#[derive(Parser)]
#[command(name = "ouiconv")]
#[command(about = "Convert an IEEE OUI vendor registry dump to JSON and CSV.")]
#[command(version = concat!("v", env!("CARGO_PKG_VERSION"), " ", env!("CARGO_PKG_DESCRIPTION")))]
pub struct CommandLine {
    /// Input OUI registry file
    #[arg(long, value_name = "PATH", help_heading = "Conversion")]
    pub input: Option<PathBuf>,

    /// Write the records as a JSON array
    #[arg(long, value_name = "PATH", help_heading = "Conversion")]
    pub json: Option<PathBuf>,

    /// Write the records as CSV
    #[arg(long, value_name = "PATH", help_heading = "Conversion")]
    pub csv: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Skip malformed groups instead of stopping at the first one
    #[arg(long)]
    pub skip_invalid: bool,

    /// Verbose output, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_help()
    }

    /// Resolves the run settings. `None` when no input was given.
    pub fn to_config(&self) -> Option<Config> {
        let input = self.input.clone()?;
        Some(Config {
            input,
            json: self.json.clone(),
            csv: self.csv.clone(),
            pretty: self.pretty,
            skip_invalid: self.skip_invalid,
            verbosity: self.verbose,
        })
    }
}
