//! Logging setup for binaries, tests and benchmarks.
//!
//! The library crates only emit `tracing` events; nothing is printed until
//! a subscriber is installed, for instance with [`init`].

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV: &str = "ENVELOPE_LOG";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directives could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("could not install subscriber: {0}")]
    AlreadyInstalled(String),
}

/// Builds the filter: `ENVELOPE_LOG` if set, else `default`.
///
/// # Errors
///
/// Returns `InvalidFilter` if the chosen directives do not parse.
pub fn filter(env: Option<&str>, default: &str) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(env.unwrap_or(default))?)
}

/// Installs a `fmt` subscriber filtered by `ENVELOPE_LOG`, falling back to
/// `default` (for example `"envelope_pbw=debug"`).
///
/// # Errors
///
/// Returns `InvalidFilter` for bad directives and `AlreadyInstalled` if a
/// global subscriber exists.
pub fn init(default: &str) -> Result<(), LoggingError> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = filter(env.as_deref(), default)?;
    let directives = filter.to_string();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))?;
    debug!(%directives, "installed log subscriber");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_filter_prefers_environment() {
        let from_env = filter(Some("envelope_pbw=trace"), "warn").unwrap();
        assert_eq!(from_env.max_level_hint(), Some(LevelFilter::TRACE));

        let fallback = filter(None, "envelope_group_algebra=debug").unwrap();
        assert_eq!(fallback.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_invalid_filter() {
        assert!(matches!(
            filter(None, "envelope_pbw=loud"),
            Err(LoggingError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_init_once() {
        if init("warn").is_ok() {
            assert!(matches!(init("warn"), Err(LoggingError::AlreadyInstalled(_))));
        }
    }
}
