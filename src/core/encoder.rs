//! JSON line encoder and its configuration
//!
//! [`EncoderConfig`] is pure data: key names plus the format of each schema
//! slot. [`EncoderConfig::encode`] turns a [`Record`] into one newline
//! terminated JSON object. Keys are written in a fixed order and user fields
//! are written in the order they were attached; duplicate user keys are all
//! kept.

use super::error::Result;
use super::field::{Field, FieldValue};
use super::keys;
use super::log_level::LogLevel;
use super::record::Record;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::panic::Location;
use std::time::Duration;

/// Key names for the fixed schema slots.
///
/// An empty key omits that slot from every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordKeys {
    pub time: String,
    pub level: String,
    pub name: String,
    pub caller: String,
    pub message: String,
    pub stacktrace: String,
    pub service_name: String,
}

impl Default for RecordKeys {
    fn default() -> Self {
        Self {
            time: keys::TIME_KEY.to_string(),
            level: keys::LEVEL_KEY.to_string(),
            name: keys::NAME_KEY.to_string(),
            caller: keys::CALLER_KEY.to_string(),
            message: keys::MESSAGE_KEY.to_string(),
            stacktrace: keys::STACKTRACE_KEY.to_string(),
            service_name: keys::SERVICE_NAME_KEY.to_string(),
        }
    }
}

impl RecordKeys {
    /// Whether a user key would shadow one of the schema slots.
    pub fn is_reserved(&self, key: &str) -> bool {
        !key.is_empty()
            && [
                &self.time,
                &self.level,
                &self.name,
                &self.caller,
                &self.message,
                &self.stacktrace,
                &self.service_name,
            ]
            .iter()
            .any(|reserved| reserved.as_str() == key)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelCase {
    #[default]
    Lowercase,
    Uppercase,
}

/// Encoding of [`FieldValue::Duration`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationFormat {
    /// Human-readable string such as `"1.5s"` or `"250ms"`
    #[default]
    String,
    /// Integer nanoseconds
    Nanos,
    /// Fractional milliseconds
    Millis,
    /// Fractional seconds
    Seconds,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallerFormat {
    /// Last directory and file name: `core/logger.rs:42`
    #[default]
    Short,
    /// Path as recorded by the compiler: `src/core/logger.rs:42`
    Full,
}

impl CallerFormat {
    pub fn format(&self, location: &Location<'_>) -> String {
        let file = match self {
            CallerFormat::Short => short_path(location.file()),
            CallerFormat::Full => location.file(),
        };
        format!("{}:{}", file, location.line())
    }
}

fn short_path(file: &str) -> &str {
    let mut separators = file.rmatch_indices(['/', '\\']);
    match (separators.next(), separators.next()) {
        (Some(_), Some((idx, _))) => &file[idx + 1..],
        _ => file,
    }
}

/// How each schema slot is serialized.
///
/// # Examples
///
/// ```
/// use rust_service_logger::{DurationFormat, EncoderConfig, LevelCase, TimestampFormat};
///
/// let config = EncoderConfig::new()
///     .with_timestamp_format(TimestampFormat::UnixMillis)
///     .with_level_case(LevelCase::Uppercase)
///     .with_duration_format(DurationFormat::Millis);
/// assert_eq!(config.level_case, LevelCase::Uppercase);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub keys: RecordKeys,
    pub timestamp_format: TimestampFormat,
    pub level_case: LevelCase,
    pub duration_format: DurationFormat,
    pub caller_format: CallerFormat,
}

impl EncoderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_keys(mut self, keys: RecordKeys) -> Self {
        self.keys = keys;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_level_case(mut self, case: LevelCase) -> Self {
        self.level_case = case;
        self
    }

    #[must_use]
    pub fn with_duration_format(mut self, format: DurationFormat) -> Self {
        self.duration_format = format;
        self
    }

    #[must_use]
    pub fn with_caller_format(mut self, format: CallerFormat) -> Self {
        self.caller_format = format;
        self
    }

    fn level_text(&self, level: LogLevel) -> &'static str {
        match self.level_case {
            LevelCase::Lowercase => level.as_str(),
            LevelCase::Uppercase => level.as_upper_str(),
        }
    }

    /// Encode `record` as one JSON object followed by `\n`.
    pub fn encode(&self, record: &Record<'_>) -> Result<Vec<u8>> {
        let mut line = JsonLine::with_capacity(256);

        line.slot(&self.keys.level, self.level_text(record.level))?;
        line.slot(
            &self.keys.time,
            &self.timestamp_format.to_json_value(&record.timestamp),
        )?;
        if !record.logger_name.is_empty() {
            line.slot(&self.keys.name, record.logger_name)?;
        }
        line.slot(&self.keys.caller, &self.caller_format.format(record.caller))?;
        line.slot(&self.keys.message, record.message)?;
        line.slot(&self.keys.service_name, record.service_name)?;

        for field in record.all_fields() {
            self.encode_field(&mut line, field)?;
        }

        if let Some(ref stacktrace) = record.stacktrace {
            line.slot(&self.keys.stacktrace, stacktrace)?;
        }

        Ok(line.finish())
    }

    fn encode_field(&self, line: &mut JsonLine, field: &Field) -> Result<()> {
        let key: Cow<'_, str> = if self.keys.is_reserved(field.key()) {
            Cow::Owned(format!("{}{}", keys::COLLISION_PREFIX, field.key()))
        } else {
            Cow::Borrowed(field.key())
        };

        match field.value() {
            FieldValue::String(s) => line.entry(&key, s),
            FieldValue::Int(i) => line.entry(&key, i),
            FieldValue::Uint(u) => line.entry(&key, u),
            // serde_json writes non-finite floats as null
            FieldValue::Float(f) => line.entry(&key, f),
            FieldValue::Bool(b) => line.entry(&key, b),
            FieldValue::Duration(d) => self.encode_duration(line, &key, *d),
            FieldValue::Null => line.entry(&key, &serde_json::Value::Null),
        }
    }

    fn encode_duration(&self, line: &mut JsonLine, key: &str, duration: Duration) -> Result<()> {
        match self.duration_format {
            DurationFormat::String => line.entry(key, &format!("{:?}", duration)),
            DurationFormat::Nanos => {
                let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
                line.entry(key, &nanos)
            }
            DurationFormat::Millis => line.entry(key, &(duration.as_secs_f64() * 1000.0)),
            DurationFormat::Seconds => line.entry(key, &duration.as_secs_f64()),
        }
    }
}

/// Incremental writer for one JSON object.
///
/// Unlike `serde_json::Map` this keeps insertion order and allows repeated
/// keys.
struct JsonLine {
    buf: Vec<u8>,
    empty: bool,
}

impl JsonLine {
    fn with_capacity(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.push(b'{');
        Self { buf, empty: true }
    }

    /// Write a schema slot; an empty configured key omits it.
    fn slot<V: Serialize + ?Sized>(&mut self, key: &str, value: &V) -> Result<()> {
        if key.is_empty() {
            return Ok(());
        }
        self.entry(key, value)
    }

    fn entry<V: Serialize + ?Sized>(&mut self, key: &str, value: &V) -> Result<()> {
        if !self.empty {
            self.buf.push(b',');
        }
        self.empty = false;
        serde_json::to_writer(&mut self.buf, key)?;
        self.buf.push(b':');
        serde_json::to_writer(&mut self.buf, value)?;
        Ok(())
    }

    fn finish(mut self) -> Vec<u8> {
        self.buf.extend_from_slice(b"}\n");
        self.buf
    }
}
