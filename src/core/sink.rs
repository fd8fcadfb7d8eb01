//! Synchronized output sink
//!
//! An [`OutputSink`] is a cheap, clonable handle to one byte destination.
//! Every clone shares the same mutex, so records written through any logger
//! derived from the same construction never interleave.

use super::error::{LoggerError, Result};
use super::metrics::LoggerMetrics;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

struct SinkInner {
    name: String,
    writer: Mutex<Box<dyn Write + Send>>,
    metrics: LoggerMetrics,
}

/// Serialized destination for encoded records.
///
/// The sink never opens or closes the underlying handle; it only writes and
/// flushes. Each [`write_record`](OutputSink::write_record) call holds the
/// lock for the whole record.
///
/// # Example
///
/// ```
/// use rust_service_logger::{OutputSink, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let sink = OutputSink::new(buffer.clone());
/// sink.write_record(b"{\"msg\":\"hello\"}\n").unwrap();
///
/// assert_eq!(buffer.lines(), vec!["{\"msg\":\"hello\"}".to_string()]);
/// ```
#[derive(Clone)]
pub struct OutputSink {
    inner: Arc<SinkInner>,
}

impl OutputSink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("custom", writer)
    }

    /// Wrap `writer` under a name used in failure reports.
    pub fn named<W: Write + Send + 'static>(name: impl Into<String>, writer: W) -> Self {
        Self {
            inner: Arc::new(SinkInner {
                name: name.into(),
                writer: Mutex::new(Box::new(writer)),
                metrics: LoggerMetrics::new(),
            }),
        }
    }

    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }

    /// Write one complete record and flush it.
    ///
    /// The lock is held across both calls, so a concurrent writer observes
    /// either none or all of `record`.
    pub fn write_record(&self, record: &[u8]) -> Result<()> {
        let mut writer = self.inner.writer.lock();
        let result = writer.write_all(record).and_then(|()| writer.flush());
        drop(writer);

        match result {
            Ok(()) => {
                self.inner.metrics.record_written(record.len());
                Ok(())
            }
            Err(e) => {
                self.inner.metrics.record_write_failure();
                Err(LoggerError::io_operation(
                    "writing log record",
                    format!("sink '{}' rejected {} bytes", self.inner.name, record.len()),
                    e,
                ))
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.writer.lock().flush()?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    /// Whether both handles point at the same destination.
    pub fn same_destination(&self, other: &OutputSink) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink")
            .field("name", &self.inner.name)
            .field("metrics", &self.inner.metrics)
            .finish()
    }
}

/// In-memory writer whose clones share one buffer.
///
/// Useful for capturing records in tests or forwarding them elsewhere.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer contents decoded lossily as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_record_updates_metrics() {
        let buffer = SharedBuffer::new();
        let sink = OutputSink::new(buffer.clone());

        sink.write_record(b"one\n").unwrap();
        sink.write_record(b"two\n").unwrap();

        assert_eq!(buffer.lines(), vec!["one", "two"]);
        assert_eq!(sink.metrics().records_written(), 2);
        assert_eq!(sink.metrics().bytes_written(), 8);
    }

    #[test]
    fn test_clones_share_destination() {
        let buffer = SharedBuffer::new();
        let sink = OutputSink::new(buffer.clone());
        let other = sink.clone();

        other.write_record(b"x\n").unwrap();
        assert!(sink.same_destination(&other));
        assert_eq!(sink.metrics().records_written(), 1);
        assert!(!sink.same_destination(&OutputSink::new(SharedBuffer::new())));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let sink = OutputSink::named("broken", BrokenPipe);
        let err = sink.write_record(b"lost\n").unwrap_err();

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("sink 'broken'"));
        assert_eq!(sink.metrics().write_failures(), 1);
        assert_eq!(sink.metrics().records_written(), 0);
    }

    #[test]
    fn test_shared_buffer_clear() {
        let mut buffer = SharedBuffer::new();
        buffer.write_all(b"abc").unwrap();
        assert_eq!(buffer.len(), 3);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
