//! Core logger types and traits

pub mod bound;
pub mod config;
pub mod context;
pub mod environment;
pub mod error;
pub mod fields;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod normalize;
pub mod record;
pub mod timestamp;

pub use bound::BoundFields;
pub use config::LoggerConfig;
pub use context::{
    with_env_type, with_request_id, Context, CorrelationId, ENV_TYPE_KEY, REQUEST_ID_KEY,
};
pub use environment::Environment;
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use handler::{Handler, SharedHandler};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use normalize::{normalize, normalize_value};
pub use record::Record;
pub use timestamp::TimestampFormat;
