//! Leveled diagnostics.
//!
//! Verbosity is a process-wide level installed once at startup: 0 shows only
//! fatal errors, each `-v` adds one of warn, info, debug, trace. Fatal and
//! warn lines go to stderr, everything else to stdout, each prefixed with a
//! bracketed level tag.

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: MinitLogger = MinitLogger;

/// Install the logger with the level selected by the `-v` count.
pub fn init(verbosity: u8) {
    log::set_logger(&LOGGER).expect("logger already installed");
    log::set_max_level(level_filter(verbosity));
}

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

struct MinitLogger;

impl Log for MinitLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => eprintln!("[FATAL] {}", record.args()),
            Level::Warn => eprintln!("[WARN ] {}", record.args()),
            Level::Info => println!("[INFO ] {}", record.args()),
            Level::Debug => println!("[DEBUG] {}", record.args()),
            Level::Trace => println!("[TRACE] {}", record.args()),
        }
    }

    fn flush(&self) {}
}
