use std::fmt;

use colored::*;
use ouiconv_common::print::{PRINT_TARGET, RAW_FIELD};
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Installs the global subscriber. Each `-v` lowers the threshold by one
/// level starting from INFO; `RUST_LOG` overrides it when set.
pub fn init_logging(verbosity: u8) {
    let env_directives: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter: EnvFilter = build_filter(verbosity, env_directives.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .event_format(OuiFormatter)
        .init();
}

/// Console lines on [`PRINT_TARGET`] stay enabled whatever the directives say.
fn build_filter(verbosity: u8, env_directives: Option<&str>) -> EnvFilter {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .parse_lossy(env_directives.unwrap_or_default());

    match format!("{PRINT_TARGET}=info").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub struct OuiFormatter;

impl<S, N> FormatEvent<S, N> for OuiFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the raw line out of a print event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == RAW_FIELD {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == RAW_FIELD {
            self.0 = format!("{value:?}");
        }
    }
}
