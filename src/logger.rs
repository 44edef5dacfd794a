//! Terminal logging backend for the `log` facade.
//!
//! Messages go to stderr with a coloured level prefix so they don't mix with anything written to
//! stdout (such as `inspect` output).

use console::{style, StyledObject};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Logger {
    level: LevelFilter,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{} {}", prefix(record.level()), record.args());
    }

    fn flush(&self) {}
}

fn prefix(level: Level) -> StyledObject<&'static str> {
    match level {
        Level::Error => style("error").red().bold(),
        Level::Warn => style("warn").yellow().bold(),
        Level::Info => style("info").green(),
        Level::Debug => style("debug").cyan(),
        Level::Trace => style("trace").dim(),
    }
}

/// Map `-v`/`-q` counts onto a level. Info is the default.
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the logger. Can only succeed once per process.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger { level }))?;
    log::set_max_level(level);
    Ok(())
}
