//! Handler trait for record-handling stages
//!
//! Handlers form a chain: decorating handlers wrap the next handler and a
//! render handler at the tail writes the record out. Handlers are persistent
//! values. Extending one with fields or a group returns a new handler and
//! leaves the receiver untouched, so a handler can be retained and reused
//! after it has been extended.

use super::{context::Context, error::Result, fields::Fields, log_level::LogLevel, record::Record};
use std::sync::Arc;

/// A handler shared between loggers and threads
pub type SharedHandler = Arc<dyn Handler>;

pub trait Handler: Send + Sync {
    /// Whether a record at `level` would be emitted
    fn enabled(&self, ctx: &Context, level: LogLevel) -> bool;

    /// Process one record
    ///
    /// Encoding and write failures are returned to the caller, never
    /// swallowed.
    fn handle(&self, ctx: &Context, record: Record) -> Result<()>;

    /// Return a new handler whose records carry `fields`
    fn with_fields(&self, fields: Fields) -> SharedHandler;

    /// Return a new handler that nests subsequent fields under `name`
    fn with_group(&self, name: &str) -> SharedHandler;

    fn name(&self) -> &str;
}
