//! Logger setup for the command-line front end
//!
//! Library code only talks to the `log` facade; the binary picks a backend here.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Log specification for a `-v` count
///
/// 0 → warn, 1 → info, 2 → debug, 3+ → trace
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start logging to stderr
///
/// `RUST_LOG` overrides the level chosen by `verbosity`. Keep the returned
/// handle alive for as long as the program should log.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` holds an invalid spec or a logger is already running.
pub fn init(verbosity: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_env_or_str(level_for(verbosity))?
        .log_to_stderr()
        .start()?;

    log::debug!("logging at {}", level_for(verbosity));
    Ok(handle)
}
