//! Shared output stream for render handlers

use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable handle to one output stream
///
/// Every clone writes to the same stream through the same lock. A record is
/// written with a single `write_all` while the lock is held, so concurrent
/// records never interleave.
#[derive(Clone)]
pub struct LogWriter {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
    name: &'static str,
}

impl LogWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named(writer, "custom")
    }

    fn named<W: Write + Send + 'static>(writer: W, name: &'static str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
            name,
        }
    }

    pub fn stdout() -> Self {
        Self::named(io::stdout(), "stdout")
    }

    /// A sink that accepts and drops every byte
    pub fn discard() -> Self {
        Self::named(io::sink(), "discard")
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Write one fully formatted record and flush it
    pub fn write_record(&self, bytes: &[u8]) -> Result<()> {
        let mut out = self.inner.lock();
        out.write_all(bytes)
            .and_then(|()| out.flush())
            .map_err(|e| {
                LoggerError::io_operation(
                    "writing log record",
                    format!("{} rejected write", self.name),
                    e,
                )
            })
    }
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogWriter").field("name", &self.name).finish()
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::stdout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{Capture, FailingWriter};

    #[test]
    fn test_write_record() {
        let capture = Capture::new();
        let writer = LogWriter::new(capture.clone());

        writer.write_record(b"one\n").unwrap();
        writer.clone().write_record(b"two\n").unwrap();

        assert_eq!(capture.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_discard_accepts_everything() {
        let writer = LogWriter::discard();
        assert!(writer.write_record(b"dropped\n").is_ok());
        assert_eq!(writer.name(), "discard");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let writer = LogWriter::new(FailingWriter);
        let err = writer.write_record(b"x").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
