//! Basic logger usage example
//!
//! Initializes the local pretty renderer, decorates a context with a fresh
//! request id and emits records at every level.
//!
//! Run with: cargo run --example basic_usage

use context_logger::prelude::*;
use context_logger::{info, warn};

fn main() -> Result<()> {
    context_logger::init(Environment::Local, LogLevel::Debug);

    let ctx = Context::background();
    let ctx = context_logger::with_request_id(&ctx, CorrelationId::new_v4());
    let ctx = context_logger::with_env_type(&ctx, Environment::Local);

    context_logger::debug(&ctx, "loading configuration", Fields::new())?;
    context_logger::info(&ctx, "server listening", fields! { "port" => 8080 })?;
    context_logger::error(
        &ctx,
        "user is authenticated",
        fields! { "userID" => uuid::Uuid::new_v4() },
    )?;

    // Bound fields and groups
    let db = context_logger::default_logger()
        .with_fields(fields! { "component" => "db" })
        .with_group("query");
    db.warn(&ctx, "slow query", fields! { "elapsed_ms" => 1250, "rows" => 3 })?;

    // Fire-and-forget macros report failures on stderr
    info!(ctx, "request finished", "status" => 200);
    warn!(Context::background(), "no request context");

    Ok(())
}
