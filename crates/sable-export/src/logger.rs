// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Leveled stderr sink behind the `log` facade.
//!
//! Lines are `[<indicator>] <elapsed> - <message>` with single-letter
//! indicators `D I W E F` and a monotonic elapsed-time stamp that can be
//! switched off. Coloring goes through `colored`, which honors
//! `NO_COLOR`. The fatal branch is the [`fatal!`] macro: it records an
//! `[F]` line and panics - defects never return.

use std::io::Write;
use std::time::Instant;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Target string that marks a record as fatal for indicator purposes.
pub const FATAL_TARGET: &str = "sable::fatal";

pub struct Logger {
    started: Instant,
    with_timestamp: bool,
}

impl Logger {
    /// Install the process-wide sink. `verbose` raises the filter from
    /// Info to Debug. Installing twice is a caller defect and surfaces
    /// as the facade's set-logger error.
    pub fn install(verbose: bool, with_timestamp: bool) -> Result<(), SetLoggerError> {
        let filter = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        log::set_boxed_logger(Box::new(Logger {
            started: Instant::now(),
            with_timestamp,
        }))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn indicator(record: &Record) -> ColoredString {
        if record.target() == FATAL_TARGET {
            return "F".red().bold();
        }
        match record.level() {
            Level::Error => "E".red(),
            Level::Warn => "W".yellow(),
            Level::Info => "I".green(),
            Level::Debug | Level::Trace => "D".dimmed(),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let indicator = Self::indicator(record);
        let mut stderr = std::io::stderr().lock();
        let _ = if self.with_timestamp {
            writeln!(
                stderr,
                "[{}] {:>10.3} - {}",
                indicator,
                self.started.elapsed().as_secs_f64(),
                record.args()
            )
        } else {
            writeln!(stderr, "[{}] {}", indicator, record.args())
        };
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[doc(hidden)]
pub fn fatal_impl(args: std::fmt::Arguments<'_>) -> ! {
    let message = args.to_string();
    log::log!(target: FATAL_TARGET, Level::Error, "{message}");
    log::logger().flush();
    panic!("{message}");
}

/// Log an `[F]` line and terminate. Used for defects only: conditions a
/// correct exporter can never reach on well-formed input.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::logger::fatal_impl(::std::format_args!($($arg)*))
    };
}
