//! Log output setup
//!
//! Records go to stderr as `YYYY/MM/DD HH:MM:SS [LEVEL] message`, keeping
//! stdout free for listings and prompts.

use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Install the global logger. `debug` lowers this crate's level to DEBUG;
/// dependencies stay at WARNING either way.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y/%m/%d %H:%M:%S"),
                level_label(record.level()),
                record.args()
            )
        })
        .init();
}

/// Level name as printed in log lines.
pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
