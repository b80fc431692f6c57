//! Process-wide default logger
//!
//! The default is a single swappable reference. Installing a logger replaces
//! the reference; loggers already cloned out of it keep working with the old
//! handler chain. Code that can take a `Logger` explicitly should do so and
//! leave these functions to top-level entry points.

use crate::core::{Context, Environment, Fields, LogLevel, Logger, LoggerError, Result};
use parking_lot::RwLock;

static DEFAULT_LOGGER: RwLock<Option<Logger>> = parking_lot::const_rwlock(None);

/// Install `logger` as the process-wide default
pub fn set_default(logger: Logger) {
    *DEFAULT_LOGGER.write() = Some(logger);
}

/// The current default logger
///
/// Before anything is installed this is a text logger on stdout at `Info`.
pub fn default_logger() -> Logger {
    if let Some(logger) = DEFAULT_LOGGER.read().as_ref() {
        return logger.clone();
    }

    DEFAULT_LOGGER
        .write()
        .get_or_insert_with(Logger::default)
        .clone()
}

/// Select, wire and install the logger for `environment`
///
/// ```
/// use context_logger::{init, info, Context, Environment, Fields, LogLevel};
///
/// init(Environment::Testing, LogLevel::Debug);
/// assert!(info(&Context::background(), "discarded", Fields::new()).is_ok());
/// ```
pub fn init(environment: Environment, min_level: LogLevel) {
    let logger = Logger::builder()
        .environment(environment)
        .min_level(min_level)
        .build();

    let previous = DEFAULT_LOGGER.write().replace(logger);
    if previous.is_some() {
        eprintln!(
            "[LOGGER WARNING] Default logger re-initialized for environment {}",
            environment
        );
    }
}

pub fn log(
    ctx: &Context,
    level: LogLevel,
    message: impl Into<String>,
    fields: Fields,
) -> Result<()> {
    default_logger().log(ctx, level, message, fields)
}

pub fn debug(ctx: &Context, message: impl Into<String>, fields: Fields) -> Result<()> {
    log(ctx, LogLevel::Debug, message, fields)
}

pub fn info(ctx: &Context, message: impl Into<String>, fields: Fields) -> Result<()> {
    log(ctx, LogLevel::Info, message, fields)
}

pub fn warn(ctx: &Context, message: impl Into<String>, fields: Fields) -> Result<()> {
    log(ctx, LogLevel::Warn, message, fields)
}

pub fn error(ctx: &Context, message: impl Into<String>, fields: Fields) -> Result<()> {
    log(ctx, LogLevel::Error, message, fields)
}

/// Report a failed emission on stderr
///
/// Used by the logging macros, which have no caller to return the error to.
#[doc(hidden)]
pub fn report_failure(err: &LoggerError) {
    eprintln!("[LOGGER ERROR] Failed to emit log record: {}", err);
}
