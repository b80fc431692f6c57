//! Handler implementations

pub mod context;
pub mod json;
pub mod pretty;
pub mod text;
pub mod writer;

pub use context::ContextHandler;
pub use json::JsonHandler;
pub use pretty::{LevelPalette, PrettyHandler};
pub use text::TextHandler;
pub use writer::LogWriter;

// Re-export the trait next to its implementations
pub use crate::core::Handler;
