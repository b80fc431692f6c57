//! Logging macros for ergonomic emission through the default logger.
//!
//! The level macros take a context, a message and any number of
//! `key => value` fields. They are fire-and-forget: a failed emission is
//! reported on stderr instead of being returned. Call the functions in
//! [`crate::global`] or a [`crate::Logger`] directly to observe failures.
//!
//! # Examples
//!
//! ```
//! use context_logger::prelude::*;
//! use context_logger::{info, warn};
//!
//! context_logger::init(Environment::Testing, LogLevel::Debug);
//! let ctx = Context::background().with_request_id("abc-123");
//!
//! info!(ctx, "Server started");
//! warn!(ctx, "Retrying", "attempt" => 3, "max" => 5);
//! ```

/// Build a [`Fields`](crate::Fields) collection from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use context_logger::fields;
///
/// let fields = fields! { "user_id" => 42, "action" => "login" };
/// assert_eq!(fields.len(), 2);
/// assert!(fields!().is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(fields.insert($key, $value);)+
        fields
    }};
}

/// Emit a record at an explicit level through the default logger.
///
/// # Examples
///
/// ```
/// # use context_logger::prelude::*;
/// use context_logger::log;
/// let ctx = Context::background();
/// log!(ctx, LogLevel::Info, "Simple message");
/// log!(ctx, LogLevel::Error, "Request failed", "status" => 500);
/// ```
#[macro_export]
macro_rules! log {
    ($ctx:expr, $level:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if let Err(err) = $crate::global::log(
            &$ctx,
            $level,
            $msg,
            $crate::fields!($($key => $value),*),
        ) {
            $crate::global::report_failure(&err);
        }
    };
}

/// Emit a debug-level record.
///
/// # Examples
///
/// ```
/// # use context_logger::prelude::*;
/// use context_logger::debug;
/// let ctx = Context::background();
/// debug!(ctx, "Cache lookup", "key" => "user:42", "hit" => false);
/// ```
#[macro_export]
macro_rules! debug {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::log!($ctx, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Emit an info-level record.
///
/// # Examples
///
/// ```
/// # use context_logger::prelude::*;
/// use context_logger::info;
/// let ctx = Context::background();
/// info!(ctx, "Application started");
/// info!(ctx, "Processing items", "count" => 100);
/// ```
#[macro_export]
macro_rules! info {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::log!($ctx, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Emit a warning-level record.
///
/// # Examples
///
/// ```
/// # use context_logger::prelude::*;
/// use context_logger::warn;
/// let ctx = Context::background();
/// warn!(ctx, "Low disk space", "free_mb" => 120);
/// ```
#[macro_export]
macro_rules! warn {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::log!($ctx, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Emit an error-level record.
///
/// # Examples
///
/// ```
/// # use context_logger::prelude::*;
/// use context_logger::error;
/// let ctx = Context::background();
/// error!(ctx, "Failed to connect to database", "attempts" => 3);
/// ```
#[macro_export]
macro_rules! error {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::log!($ctx, $crate::LogLevel::Error, $($arg)+)
    };
}
