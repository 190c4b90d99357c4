use log::{Level, LevelFilter, Log, Metadata, Record};

use super::CliError;

#[inline]
fn red(string: &str) -> String {
    format!("{}{}{}", "\u{001b}[31m\u{001b}[1m", string, "\u{001b}[0m")
}

#[inline]
fn yellow(string: &str) -> String {
    format!("{}{}{}", "\u{001b}[33m\u{001b}[1m", string, "\u{001b}[0m")
}

#[inline]
fn blue(string: &str) -> String {
    format!("{}{}{}", "\u{001b}[34m\u{001b}[1m", string, "\u{001b}[0m")
}

/// Writes log records to stderr, one line each.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let label = match record.level() {
            Level::Error => red("error"),
            Level::Warn => yellow("warn"),
            Level::Info => blue("info"),
            Level::Debug => "debug".to_string(),
            Level::Trace => "trace".to_string(),
        };
        eprintln!("{}: {}", label, record.args());
    }

    fn flush(&self) {}
}

/// Installs the stderr logger: `Debug` when verbose, `Warn` otherwise.
/// `trace` adds the per-sample division messages.
pub fn init_logger(verbose: bool, trace: bool) -> Result<(), CliError> {
    let level = match (verbose, trace) {
        (_, true) => LevelFilter::Trace,
        (true, false) => LevelFilter::Debug,
        (false, false) => LevelFilter::Warn,
    };
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
