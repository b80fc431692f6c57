//! Main logger implementation

use super::{
    config::LoggerConfig,
    context::Context,
    environment::Environment,
    error::Result,
    fields::Fields,
    handler::{Handler, SharedHandler},
    log_level::LogLevel,
    record::Record,
    timestamp::TimestampFormat,
};
use crate::handlers::{ContextHandler, JsonHandler, LogWriter, PrettyHandler, TextHandler};
use std::fmt;
use std::sync::Arc;

/// Front end over a handler chain
///
/// A `Logger` is cheap to clone: clones share the same handler chain.
/// Every emission returns the handler's outcome so the caller can observe
/// encoding and write failures.
#[derive(Clone)]
pub struct Logger {
    handler: SharedHandler,
}

impl Logger {
    pub fn new(handler: SharedHandler) -> Self {
        Self { handler }
    }

    pub fn from_handler<H: Handler + 'static>(handler: H) -> Self {
        Self::new(Arc::new(handler))
    }

    pub fn handler(&self) -> &SharedHandler {
        &self.handler
    }

    pub fn enabled(&self, ctx: &Context, level: LogLevel) -> bool {
        self.handler.enabled(ctx, level)
    }

    pub fn log(
        &self,
        ctx: &Context,
        level: LogLevel,
        message: impl Into<String>,
        fields: Fields,
    ) -> Result<()> {
        if !self.enabled(ctx, level) {
            return Ok(());
        }

        let record = Record::new(level, message).with_fields(fields);
        self.handler.handle(ctx, record)
    }

    #[inline]
    pub fn debug(&self, ctx: &Context, message: impl Into<String>, fields: Fields) -> Result<()> {
        self.log(ctx, LogLevel::Debug, message, fields)
    }

    #[inline]
    pub fn info(&self, ctx: &Context, message: impl Into<String>, fields: Fields) -> Result<()> {
        self.log(ctx, LogLevel::Info, message, fields)
    }

    #[inline]
    pub fn warn(&self, ctx: &Context, message: impl Into<String>, fields: Fields) -> Result<()> {
        self.log(ctx, LogLevel::Warn, message, fields)
    }

    #[inline]
    pub fn error(&self, ctx: &Context, message: impl Into<String>, fields: Fields) -> Result<()> {
        self.log(ctx, LogLevel::Error, message, fields)
    }

    /// Return a logger whose records all carry `fields`
    #[must_use]
    pub fn with_fields(&self, fields: Fields) -> Logger {
        Logger::new(self.handler.with_fields(fields))
    }

    /// Return a logger that nests subsequent fields under `name`
    #[must_use]
    pub fn with_group(&self, name: &str) -> Logger {
        Logger::new(self.handler.with_group(name))
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use context_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .environment(Environment::Testing)
    ///     .min_level(LogLevel::Debug)
    ///     .build();
    ///
    /// assert!(logger.info(&Context::background(), "ready", Fields::new()).is_ok());
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("handler", &self.handler.name())
            .finish()
    }
}

/// Builder selecting and wiring the handler chain for an environment
///
/// | Environment   | Render handler                       |
/// |---------------|--------------------------------------|
/// | `Testing`     | `JsonHandler` on a discarding sink   |
/// | `Local`       | `PrettyHandler`                      |
/// | `Production`  | `JsonHandler`                        |
/// | `Unspecified` | `TextHandler`                        |
///
/// The render handler is always wrapped in a `ContextHandler`.
pub struct LoggerBuilder {
    environment: Environment,
    min_level: LogLevel,
    writer: Option<LogWriter>,
    use_colors: bool,
    timestamp_format: Option<TimestampFormat>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            environment: Environment::Unspecified,
            min_level: LogLevel::Info,
            writer: None,
            use_colors: true,
            timestamp_format: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Send output somewhere other than stdout
    ///
    /// Ignored for `Environment::Testing`, which always discards.
    #[must_use = "builder methods return a new value"]
    pub fn writer(mut self, writer: LogWriter) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Enable or disable ANSI colors in the pretty renderer
    #[must_use = "builder methods return a new value"]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Override the renderer's default timestamp format
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Build the render handler for the configured environment, unwrapped
    pub fn build_render_handler(&self) -> SharedHandler {
        let writer = self.writer.clone().unwrap_or_else(LogWriter::stdout);

        match self.environment {
            Environment::Testing => Arc::new(JsonHandler::discard(self.min_level)),
            Environment::Local => {
                let mut handler = PrettyHandler::new(writer, self.min_level)
                    .with_colors(self.use_colors);
                if let Some(format) = self.timestamp_format.clone() {
                    handler = handler.with_timestamp_format(format);
                }
                Arc::new(handler)
            }
            Environment::Production => {
                let mut handler = JsonHandler::new(writer, self.min_level);
                if let Some(format) = self.timestamp_format.clone() {
                    handler = handler.with_timestamp_format(format);
                }
                Arc::new(handler)
            }
            Environment::Unspecified => {
                let mut handler = TextHandler::new(writer, self.min_level);
                if let Some(format) = self.timestamp_format.clone() {
                    handler = handler.with_timestamp_format(format);
                }
                Arc::new(handler)
            }
        }
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let render = self.build_render_handler();
        Logger::new(Arc::new(ContextHandler::new(render)))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&LoggerConfig> for LoggerBuilder {
    fn from(config: &LoggerConfig) -> Self {
        let mut builder = LoggerBuilder::new()
            .environment(config.environment)
            .min_level(config.min_level)
            .use_colors(config.use_colors);
        if let Some(format) = config.timestamp_format.clone() {
            builder = builder.timestamp_format(format);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{Capture, FailingWriter, RecordingHandler};

    #[test]
    fn test_builder_selects_render_handler() {
        let cases = [
            (Environment::Testing, "json"),
            (Environment::Local, "pretty"),
            (Environment::Production, "json"),
            (Environment::Unspecified, "text"),
        ];

        for (environment, expected) in cases {
            let builder = Logger::builder()
                .environment(environment)
                .writer(LogWriter::discard());
            assert_eq!(builder.build_render_handler().name(), expected);
            assert_eq!(builder.build().handler().name(), "context");
        }
    }

    #[test]
    fn test_testing_environment_ignores_writer() {
        let capture = Capture::new();
        let logger = Logger::builder()
            .environment(Environment::Testing)
            .min_level(LogLevel::Debug)
            .writer(LogWriter::new(capture.clone()))
            .build();

        logger
            .info(&Context::background(), "hidden", Fields::new())
            .unwrap();
        assert!(capture.contents().is_empty());
    }

    #[test]
    fn test_min_level_gates_emission() {
        let recorder = RecordingHandler::new(LogLevel::Warn);
        let logger = Logger::from_handler(recorder.clone());
        let ctx = Context::background();

        logger.debug(&ctx, "d", Fields::new()).unwrap();
        logger.info(&ctx, "i", Fields::new()).unwrap();
        logger.warn(&ctx, "w", Fields::new()).unwrap();
        logger.error(&ctx, "e", Fields::new()).unwrap();

        let messages: Vec<String> = recorder.records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["w", "e"]);
    }

    #[test]
    fn test_write_failure_is_returned() {
        let logger = Logger::builder()
            .environment(Environment::Production)
            .writer(LogWriter::new(FailingWriter))
            .build();

        assert!(logger.error(&Context::background(), "lost", Fields::new()).is_err());
    }

    #[test]
    fn test_with_fields_returns_new_logger() {
        let recorder = RecordingHandler::new(LogLevel::Debug);
        let base = Logger::from_handler(recorder.clone());
        let child = base.with_fields(Fields::new().with_field("component", "db"));
        let ctx = Context::background();

        base.info(&ctx, "from base", Fields::new()).unwrap();
        child.info(&ctx, "from child", Fields::new()).unwrap();

        let records = recorder.records();
        assert!(!records[0].fields.contains_key("component"));
        assert!(records[1].fields.contains_key("component"));
    }

    #[test]
    fn test_builder_from_config() {
        let config = LoggerConfig {
            environment: Environment::Local,
            min_level: LogLevel::Warn,
            use_colors: false,
            timestamp_format: Some(TimestampFormat::Iso8601),
        };
        let builder = LoggerBuilder::from(&config).writer(LogWriter::discard());
        assert_eq!(builder.build_render_handler().name(), "pretty");
        assert!(!builder.build().enabled(&Context::background(), LogLevel::Info));
    }
}
