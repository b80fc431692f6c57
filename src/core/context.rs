//! Execution context carrying request-scoped correlation data
//!
//! A `Context` is an immutable value owned by the calling code path. Attaching
//! a value returns a new context and leaves the original untouched, so a
//! context can be handed to worker threads and extended independently.
//!
//! # Example
//!
//! ```
//! use context_logger::{Context, Environment};
//!
//! let base = Context::background();
//! let ctx = base.with_request_id("abc-123").with_env_type(Environment::Local);
//!
//! assert_eq!(ctx.request_id().map(|id| id.as_str()), Some("abc-123"));
//! assert!(base.request_id().is_none());
//! ```

use super::environment::Environment;
use std::fmt;
use std::sync::Arc;

/// Field name under which the correlation identifier is injected
pub const REQUEST_ID_KEY: &str = "requestID";

/// Field name under which the environment tag is injected
pub const ENV_TYPE_KEY: &str = "envType";

/// Opaque identifier tying together all records of one logical request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(Arc<str>);

impl CorrelationId {
    /// Generate a fresh random identifier
    pub fn new_v4() -> Self {
        uuid::Uuid::new_v4().into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<uuid::Uuid> for CorrelationId {
    fn from(id: uuid::Uuid) -> Self {
        CorrelationId(Arc::from(id.to_string()))
    }
}

impl From<&str> for CorrelationId {
    fn from(id: &str) -> Self {
        CorrelationId(Arc::from(id))
    }
}

impl From<String> for CorrelationId {
    fn from(id: String) -> Self {
        CorrelationId(Arc::from(id))
    }
}

/// Immutable carrier of correlation values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    request_id: Option<CorrelationId>,
    env_type: Option<Environment>,
}

impl Context {
    /// An empty context with no correlation values
    pub fn background() -> Self {
        Self::default()
    }

    /// Return a copy of this context carrying `id` as its correlation identifier
    #[must_use]
    pub fn with_request_id(&self, id: impl Into<CorrelationId>) -> Self {
        Self {
            request_id: Some(id.into()),
            ..self.clone()
        }
    }

    /// Return a copy of this context carrying `env` as its environment tag
    #[must_use]
    pub fn with_env_type(&self, env: Environment) -> Self {
        Self {
            env_type: Some(env),
            ..self.clone()
        }
    }

    pub fn request_id(&self) -> Option<&CorrelationId> {
        self.request_id.as_ref()
    }

    pub fn env_type(&self) -> Option<Environment> {
        self.env_type
    }
}

/// Attach a correlation identifier to `ctx`
pub fn with_request_id(ctx: &Context, id: impl Into<CorrelationId>) -> Context {
    ctx.with_request_id(id)
}

/// Attach an environment tag to `ctx`
pub fn with_env_type(ctx: &Context, env: Environment) -> Context {
    ctx.with_env_type(env)
}
