//! # Context Logger
//!
//! A structured logging facade that decorates records with request-scoped
//! correlation data and renders them for the deployment environment.
//!
//! ## Features
//!
//! - **Context Injection**: Correlation id and environment tag are copied from
//!   the execution context into every record
//! - **Environment Rendering**: JSON lines for production, colorized blocks for
//!   local development, a discarding sink for tests
//! - **Persistent Handlers**: Extending a handler returns a new one
//! - **Thread Safe**: Each record is written atomically
//!
//! ## Example
//!
//! ```
//! use context_logger::prelude::*;
//!
//! context_logger::init(Environment::Testing, LogLevel::Debug);
//!
//! let ctx = Context::background().with_request_id("abc-123");
//! context_logger::error(&ctx, "disk full", fields! { "path" => "/tmp" })?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod global;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Context, CorrelationId, Environment, FieldValue, Fields, Handler, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, Record, Result, SharedHandler,
        TimestampFormat,
    };
    pub use crate::fields;
    pub use crate::handlers::{ContextHandler, JsonHandler, LogWriter, PrettyHandler, TextHandler};
}

pub use crate::core::{
    with_env_type, with_request_id, Context, CorrelationId, Environment, FieldValue, Fields,
    Handler, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, Record, Result,
    SharedHandler, TimestampFormat, ENV_TYPE_KEY, REQUEST_ID_KEY,
};
pub use global::{debug, default_logger, error, info, init, log, set_default, warn};
pub use handlers::{ContextHandler, JsonHandler, LevelPalette, LogWriter, PrettyHandler, TextHandler};
