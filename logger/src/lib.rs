//! Default logging setup for the PAL bitstream compiler
//!
//! Log output goes to stderr. The `PALC_LOG` environment variable takes an `env_logger` filter
//! and overrides the default filter, `PALC_LOG_STYLE` controls colored output.
#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::{sync::Mutex, time::Instant};

const TIMESTAMP_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightBlack)));

const TARGET_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Magenta)));

/// Environment variable holding the log filter.
pub const FILTER_ENV: &str = "PALC_LOG";

/// Environment variable controlling colored log output.
pub const STYLE_ENV: &str = "PALC_LOG_STYLE";

/// Filter used by [`setup`] when `PALC_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Perform the default logging setup, logging at `info` level unless `PALC_LOG` says otherwise.
pub fn setup() {
    setup_with_default(DEFAULT_FILTER)
}

/// Perform the default logging setup with the given filter, used when `PALC_LOG` is not set.
///
/// Each message is prefixed with the time since setup. Whenever the module emitting messages
/// changes, its name is printed on a line of its own.
pub fn setup_with_default(filter: &str) {
    let start_time = Instant::now();
    let last_target = Mutex::new(String::new());

    env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(FILTER_ENV, filter)
            .write_style(STYLE_ENV),
    )
    .format(move |buf, record| {
        use std::io::Write;

        let timestamp = start_time.elapsed();
        let level = record.level();
        let target = record.target();

        let mut last_target = last_target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if target != *last_target {
            last_target.clear();
            last_target.push_str(target);

            writeln!(
                buf,
                "{} {}",
                format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
                format_args!("{style}{target}{style:#}", style = TARGET_STYLE)
            )?;
        }
        writeln!(
            buf,
            "{} {} {}",
            format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
            format_args!(
                "{style}{level:<5}{style:#}",
                style = buf.default_level_style(level),
            ),
            record.args(),
        )
    })
    .init();
}

/// Returns the default filter for a command line debug level.
///
/// Level 0 logs at `info`, 1 at `debug` and 2 or above at `trace`.
pub fn filter_for_debug_level(level: u8) -> &'static str {
    match level {
        0 => DEFAULT_FILTER,
        1 => "debug",
        _ => "trace",
    }
}
