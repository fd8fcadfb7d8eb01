//! Main logger implementation

use super::{
    config::{LoggerConfig, LoggerOption},
    encoder::EncoderConfig,
    error::{LoggerError, Result},
    field::{field, Field},
    keys,
    log_level::{should_emit, LogLevel},
    metrics::LoggerMetrics,
    record::Record,
    sink::OutputSink,
};
use std::backtrace::Backtrace;
use std::io::Write;
use std::sync::Arc;

/// Immutable structured logger.
///
/// A `Logger` is a value: attaching fields returns a new logger and leaves
/// the receiver untouched. Every logger derived from one construction shares
/// the same [`OutputSink`], so their records are serialized against each
/// other. The field sequence is never shared mutably; derivation builds a
/// fresh sequence.
///
/// # Example
///
/// ```
/// use rust_service_logger::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new("billing", [with_level("debug"), with_output(OutputSink::new(buffer.clone()))]);
///
/// let request = logger.with_fields([field("request_id", "r-17"), field("attempt", 2)]);
/// request.info("charge accepted", &[field("amount_cents", 1299)]);
///
/// let line = buffer.contents();
/// assert!(line.contains("\"msg\":\"charge accepted\""));
/// assert!(line.contains("\"service-name\":\"billing\""));
/// assert!(line.contains("\"request_id\":\"r-17\""));
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    min_level: LogLevel,
    sink: OutputSink,
    encoder: Arc<EncoderConfig>,
    service_name: Arc<str>,
    name: Arc<str>,
    stacktrace_level: Option<LogLevel>,
    fields: Arc<[Field]>,
}

impl Logger {
    /// Build a logger for `service_name`, applying `options` in order.
    ///
    /// Construction never fails; unknown level names resolve to `info`.
    pub fn new<I>(service_name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        Self::from_config(service_name, LoggerConfig::from_options(options))
    }

    pub fn from_config(service_name: impl Into<String>, config: LoggerConfig) -> Self {
        let service_name: Arc<str> = Arc::from(service_name.into());
        Self {
            min_level: config.min_level,
            sink: config.output,
            encoder: Arc::new(config.encoder),
            name: Arc::clone(&service_name),
            service_name,
            stacktrace_level: config.stacktrace_level,
            fields: Arc::from(Vec::new()),
        }
    }

    fn derive(&self, fields: Arc<[Field]>, name: Arc<str>) -> Self {
        Self {
            min_level: self.min_level,
            sink: self.sink.clone(),
            encoder: Arc::clone(&self.encoder),
            service_name: Arc::clone(&self.service_name),
            name,
            stacktrace_level: self.stacktrace_level,
            fields,
        }
    }

    #[must_use]
    pub fn with_field(&self, field: Field) -> Logger {
        self.with_fields([field])
    }

    /// Logger carrying this logger's fields followed by `fields`.
    ///
    /// An empty `fields` returns a clone sharing the current sequence.
    #[must_use]
    pub fn with_fields<I>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = Field>,
    {
        let mut added = fields.into_iter().peekable();
        if added.peek().is_none() {
            return self.clone();
        }

        let mut combined = Vec::with_capacity(self.fields.len() + added.size_hint().0);
        combined.extend(self.fields.iter().cloned());
        combined.extend(added);
        self.derive(Arc::from(combined), Arc::clone(&self.name))
    }

    /// Logger whose name has `segment` appended, dot separated.
    #[must_use]
    pub fn named(&self, segment: &str) -> Logger {
        if segment.is_empty() {
            return self.clone();
        }
        let name: Arc<str> = if self.name.is_empty() {
            Arc::from(segment)
        } else {
            Arc::from(format!("{}.{}", self.name, segment))
        };
        self.derive(Arc::clone(&self.fields), name)
    }

    #[must_use]
    pub fn with_correlation_id(&self, correlation_id: impl Into<String>) -> Logger {
        self.with_field(field(keys::CORRELATION_ID_KEY, correlation_id.into()))
    }

    #[must_use]
    pub fn with_trace(&self, trace_id: impl Into<String>, span_id: impl Into<String>) -> Logger {
        self.with_fields([
            field(keys::TRACE_ID_KEY, trace_id.into()),
            field(keys::SPAN_ID_KEY, span_id.into()),
        ])
    }

    /// Logger tagged with this machine's host name.
    pub fn with_hostname(&self) -> Result<Logger> {
        let raw = hostname::get().map_err(|e| {
            LoggerError::io_operation("resolving hostname", "hostname lookup failed", e)
        })?;
        let host = raw
            .into_string()
            .map_err(|raw| LoggerError::other(format!("hostname is not valid UTF-8: {:?}", raw)))?;
        Ok(self.with_field(field(keys::HOSTNAME_KEY, host)))
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        should_emit(level, self.min_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Write statistics of the shared sink
    pub fn metrics(&self) -> &LoggerMetrics {
        self.sink.metrics()
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Emit `message` at `level`.
    ///
    /// Below the minimum level this returns before anything is allocated or
    /// written. Otherwise the record is encoded in full and handed to the
    /// sink in one write. Levels above `Error` are written like any other;
    /// this never panics or exits.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: &str, fields: &[Field]) {
        if !self.enabled(level) {
            return;
        }

        let mut record = Record::new(level, message);
        record.logger_name = &*self.name;
        record.service_name = &*self.service_name;
        record.context = &*self.fields;
        record.fields = fields;
        if self.stacktrace_level.is_some_and(|threshold| level >= threshold) {
            record.stacktrace = Some(Backtrace::force_capture().to_string());
        }

        self.write(&record);
    }

    fn write(&self, record: &Record<'_>) {
        let result = self
            .encoder
            .encode(record)
            .and_then(|line| self.sink.write_record(&line));

        if let Err(e) = result {
            eprintln!(
                "[LOGGER ERROR] Failed to write record to sink '{}': {}",
                self.sink.name(),
                e
            );
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Debug, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Info, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Warn, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Error, message, fields);
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Each method records one [`LoggerOption`]; they are applied in call order
/// when [`build`](LoggerBuilder::build) runs.
///
/// # Example
/// ```
/// use rust_service_logger::prelude::*;
///
/// let logger = Logger::builder("inventory")
///     .level("WARN")
///     .writer(SharedBuffer::new())
///     .stacktrace(LogLevel::Error)
///     .build();
/// assert_eq!(logger.min_level(), LogLevel::Warn);
/// ```
pub struct LoggerBuilder {
    service_name: String,
    options: Vec<LoggerOption>,
}

impl LoggerBuilder {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            options: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LoggerOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set minimum level by name
    #[must_use = "builder methods return a new value"]
    pub fn level(self, name: &str) -> Self {
        self.option(super::config::with_level(name))
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(self, level: LogLevel) -> Self {
        self.option(LoggerOption::MinLevel(level))
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(self, sink: OutputSink) -> Self {
        self.option(LoggerOption::Output(sink))
    }

    /// Wrap `writer` in a fresh sink
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.output(OutputSink::new(writer))
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoder(self, encoder: EncoderConfig) -> Self {
        self.option(LoggerOption::Encoder(encoder))
    }

    #[must_use = "builder methods return a new value"]
    pub fn stacktrace(self, level: LogLevel) -> Self {
        self.option(LoggerOption::Stacktrace(level))
    }

    pub fn build(self) -> Logger {
        Logger::new(self.service_name, self.options)
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(service_name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(service_name)
    }
}
