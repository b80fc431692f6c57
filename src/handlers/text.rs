//! Logfmt-style text render handler, the fallback for unspecified environments

use super::writer::LogWriter;
use crate::core::{
    BoundFields, Context, FieldValue, Fields, Handler, LogLevel, Record, Result, SharedHandler,
    TimestampFormat,
};
use std::sync::Arc;

/// Writes each record as one line of `key=value` pairs
///
/// Example: `time=2025-01-08T10:30:45.123Z level=INFO msg="Request processed" status=200`
///
/// Fields inside groups are flattened with dotted keys (`group.key=value`).
#[derive(Debug, Clone)]
pub struct TextHandler {
    writer: LogWriter,
    min_level: LogLevel,
    timestamp_format: TimestampFormat,
    bound: BoundFields,
}

impl TextHandler {
    pub fn new(writer: LogWriter, min_level: LogLevel) -> Self {
        Self {
            writer,
            min_level,
            timestamp_format: TimestampFormat::Iso8601,
            bound: BoundFields::new(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format a record as one logfmt line, including the trailing newline
    pub fn format_record(&self, record: &Record) -> Result<String> {
        let mut parts = vec![
            format!(
                "time={}",
                escape_value(&self.timestamp_format.format(&record.timestamp))
            ),
            format!("level={}", record.level.to_str()),
            format!("msg={}", escape_value(&record.message)),
        ];

        for (key, value) in self.bound.resolve(record.fields.clone()).iter() {
            push_field(&mut parts, &escape_key(key), value)?;
        }

        let mut line = parts.join(" ");
        line.push('\n');
        Ok(line)
    }
}

fn push_field(parts: &mut Vec<String>, key: &str, value: &FieldValue) -> Result<()> {
    match value {
        FieldValue::Map(entries) if !entries.is_empty() => {
            for (child, nested) in entries {
                push_field(parts, &format!("{}.{}", key, escape_key(child)), nested)?;
            }
        }
        FieldValue::String(s) => parts.push(format!("{}={}", key, escape_value(s))),
        other => {
            let encoded = other.to_json_value()?.to_string();
            parts.push(format!("{}={}", key, escape_value(&encoded)));
        }
    }
    Ok(())
}

/// Key written when nothing of the original key survives escaping
const EMPTY_KEY: &str = "_";

/// Escape a logfmt key (remove spaces and special chars)
fn escape_key(key: &str) -> String {
    let escaped: String = key
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
        .collect();
    if escaped.is_empty() {
        EMPTY_KEY.to_string()
    } else {
        escaped
    }
}

/// Escape a logfmt value (quote if it contains spaces, delimiters or control chars)
fn escape_value(value: &str) -> String {
    if value.is_empty() || value.contains([' ', '"', '=']) || value.contains(char::is_control) {
        quote_value(value)
    } else {
        value.to_string()
    }
}

/// Quote a value so the whole record stays on one line
fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl Handler for TextHandler {
    fn enabled(&self, _ctx: &Context, level: LogLevel) -> bool {
        level.is_enabled_for(self.min_level)
    }

    fn handle(&self, ctx: &Context, record: Record) -> Result<()> {
        if !self.enabled(ctx, record.level) {
            return Ok(());
        }

        let line = self.format_record(&record)?;
        self.writer.write_record(line.as_bytes())
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
        "text"
    }
}
