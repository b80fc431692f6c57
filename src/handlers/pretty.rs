//! Colorized multi-line render handler for local development
//!
//! Each record renders as a header line followed by an indented field block:
//!
//! ```text
//! [2025-01-08T10:30:45Z]~[ERROR]: disk full
//! {
//!   "path": "/tmp",
//!   "requestID": "abc-123"
//! }
//! ```
//!
//! The field block is omitted when a record has no fields beyond the header.
//! Key order inside the block is not part of the output contract.

use super::writer::LogWriter;
use crate::core::{
    normalize, BoundFields, Context, Fields, Handler, LogLevel, LoggerError, Record, Result,
    SharedHandler, TimestampFormat,
};
use colored::{Color, Colorize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

const TIME_KEY: &str = "time";
const LEVEL_KEY: &str = "level";
const MSG_KEY: &str = "msg";

/// Severity to color mapping used by `PrettyHandler`
///
/// Levels without an entry render in the fallback color.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPalette {
    colors: HashMap<LogLevel, Color>,
    fallback: Color,
}

impl LevelPalette {
    /// A palette with no level colors, everything renders in `fallback`
    pub fn empty(fallback: Color) -> Self {
        Self {
            colors: HashMap::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn with_color(mut self, level: LogLevel, color: Color) -> Self {
        self.colors.insert(level, color);
        self
    }

    pub fn color_for(&self, level: LogLevel) -> Color {
        self.colors.get(&level).copied().unwrap_or(self.fallback)
    }
}

impl Default for LevelPalette {
    fn default() -> Self {
        LogLevel::ALL
            .iter()
            .fold(Self::empty(Color::BrightBlack), |palette, level| {
                palette.with_color(*level, level.color_code())
            })
    }
}

#[derive(Debug, Clone)]
pub struct PrettyHandler {
    writer: LogWriter,
    min_level: LogLevel,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    palette: Arc<LevelPalette>,
    bound: BoundFields,
}

impl PrettyHandler {
    pub fn new(writer: LogWriter, min_level: LogLevel) -> Self {
        Self {
            writer,
            min_level,
            use_colors: true,
            timestamp_format: TimestampFormat::Rfc3339,
            palette: Arc::new(LevelPalette::default()),
            bound: BoundFields::new(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: LevelPalette) -> Self {
        self.palette = Arc::new(palette);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Render a record as header line plus optional field block
    pub fn format_record(&self, record: &Record) -> Result<String> {
        let mut fields = Fields::new()
            .with_field(TIME_KEY, self.timestamp_format.format(&record.timestamp))
            .with_field(LEVEL_KEY, record.level.to_str())
            .with_field(MSG_KEY, record.message.as_str());
        fields.extend(self.bound.resolve(record.fields.clone()));

        let mut normalized = normalize(&fields)?;
        let time = scalar_text(normalized.remove(TIME_KEY));
        let level = scalar_text(normalized.remove(LEVEL_KEY));
        let message = scalar_text(normalized.remove(MSG_KEY));

        let mut out = String::new();
        write!(
            out,
            "[{}]~[{}]: {}",
            self.paint(&time, |s| s.cyan().to_string()),
            self.paint(&level, |s| s.color(self.palette.color_for(record.level)).to_string()),
            self.paint(&message, |s| s.underline().white().to_string()),
        )
        .map_err(|e| LoggerError::formatter("pretty", e.to_string()))?;

        if !normalized.is_empty() {
            out.push_str("\n{\n");
            let last = normalized.len() - 1;
            for (idx, (key, value)) in normalized.iter().enumerate() {
                let key = format!("{}: ", serde_json::to_string(key)?);
                let value = serde_json::to_string(value)?;
                out.push_str("  ");
                out.push_str(&self.paint(&key, |s| s.bright_white().to_string()));
                out.push_str(&self.paint(&value, |s| s.bright_black().to_string()));
                if idx < last {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push('}');
        }

        out.push('\n');
        Ok(out)
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.use_colors {
            style(text)
        } else {
            text.to_string()
        }
    }
}

/// Strings print bare, anything else prints as its JSON encoding
fn scalar_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

impl Handler for PrettyHandler {
    fn enabled(&self, _ctx: &Context, level: LogLevel) -> bool {
        level.is_enabled_for(self.min_level)
    }

    fn handle(&self, ctx: &Context, record: Record) -> Result<()> {
        if !self.enabled(ctx, record.level) {
            return Ok(());
        }

        let block = self.format_record(&record)?;
        self.writer.write_record(block.as_bytes())
    }

    fn with_fields(&self, fields: Fields) -> SharedHandler {
        Arc::new(Self {
            bound: self.bound.with_fields(fields),
            ..self.clone()
        })
    }

    fn with_group(&self, name: &str) -> SharedHandler {
        Arc::new(Self {
            bound: self.bound.with_group(name),
            ..self.clone()
        })
    }

    fn name(&self) -> &str {
        "pretty"
    }
}
