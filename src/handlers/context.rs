//! Handler that injects execution-context values into records

use crate::core::{
    Context, Fields, Handler, LogLevel, Record, Result, SharedHandler, ENV_TYPE_KEY,
    REQUEST_ID_KEY,
};
use std::sync::Arc;

/// Decorator that copies correlation values from the `Context` into each record
///
/// The correlation identifier is added as `requestID` and the environment tag
/// as `envType`, after the fields already on the record. A field the caller
/// set explicitly under either name is left as is. Absent context values add
/// nothing.
pub struct ContextHandler {
    inner: SharedHandler,
}

impl ContextHandler {
    pub fn new(inner: SharedHandler) -> Self {
        Self { inner }
    }
}

impl Handler for ContextHandler {
    fn enabled(&self, ctx: &Context, level: LogLevel) -> bool {
        self.inner.enabled(ctx, level)
    }

    fn handle(&self, ctx: &Context, mut record: Record) -> Result<()> {
        if let Some(id) = ctx.request_id() {
            if !record.fields.contains_key(REQUEST_ID_KEY) {
                record.add_field(REQUEST_ID_KEY, id.as_str());
            }
        }

        if let Some(env) = ctx.env_type() {
            if !record.fields.contains_key(ENV_TYPE_KEY) {
                record.add_field(ENV_TYPE_KEY, env.to_str());
            }
        }

        self.inner.handle(ctx, record)
    }

    fn with_fields(&self, fields: Fields) -> SharedHandler {
        Arc::new(ContextHandler::new(self.inner.with_fields(fields)))
    }

    fn with_group(&self, name: &str) -> SharedHandler {
        Arc::new(ContextHandler::new(self.inner.with_group(name)))
    }

    fn name(&self) -> &str {
        "context"
    }
}
