mod commands;
mod terminal;

use commands::{CommandLine, convert};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let Some(cfg) = commands.to_config() else {
        CommandLine::print_help()?;
        return Ok(());
    };

    logging::init_logging(cfg.verbosity);

    print::header("converting vendor registry", cfg.verbosity);
    convert::convert(&cfg)
}
