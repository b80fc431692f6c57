//! JSON render handler for machine ingestion

use super::writer::LogWriter;
use crate::core::{
    BoundFields, Context, FieldValue, Fields, Handler, LogLevel, Record, Result, SharedHandler,
    TimestampFormat,
};
use std::sync::Arc;

/// Writes each record as a single-line JSON object (JSONL)
///
/// The line starts with `time`, `level` and `msg`, followed by bound and
/// call-site fields in the same namespace. Compatible with log aggregation
/// tools like ELK, Loki, etc.
#[derive(Debug, Clone)]
pub struct JsonHandler {
    writer: LogWriter,
    min_level: LogLevel,
    timestamp_format: TimestampFormat,
    bound: BoundFields,
}

impl JsonHandler {
    pub fn new(writer: LogWriter, min_level: LogLevel) -> Self {
        Self {
            writer,
            min_level,
            timestamp_format: TimestampFormat::Iso8601,
            bound: BoundFields::new(),
        }
    }

    /// A handler that encodes every record and then drops the bytes
    pub fn discard(min_level: LogLevel) -> Self {
        Self::new(LogWriter::discard(), min_level)
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Encode a record as one JSON line, including the trailing newline
    pub fn format_record(&self, record: &Record) -> Result<String> {
        let mut fields = Fields::new()
            .with_field(
                "time",
                FieldValue::from_json(self.timestamp_format.format_json(&record.timestamp)),
            )
            .with_field("level", record.level.to_str())
            .with_field("msg", record.message.as_str());
        fields.extend(self.bound.resolve(record.fields.clone()));

        let mut line = String::from("{");
        for (idx, (key, value)) in fields.iter().enumerate() {
            if idx > 0 {
                line.push(',');
            }
            line.push_str(&serde_json::to_string(key)?);
            line.push(':');
            line.push_str(&serde_json::to_string(&value.to_json_value()?)?);
        }
        line.push_str("}\n");
        Ok(line)
    }
}

impl Handler for JsonHandler {
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
        "json"
    }
}
