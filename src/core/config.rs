//! Logger configuration and construction options
//!
//! [`LoggerConfig`] is the explicit record of everything a logger is built
//! from. [`LoggerOption`] values mutate one attribute each and are applied in
//! order, so a later option for the same attribute replaces an earlier one.

use super::encoder::EncoderConfig;
use super::log_level::LogLevel;
use super::sink::OutputSink;
use serde::{Deserialize, Deserializer};

/// Settings a [`Logger`](super::Logger) is sealed with.
///
/// Deserializable from any serde format; the sink cannot be expressed in
/// data and always defaults to stdout. Level names are resolved leniently,
/// so an unknown name yields `info` instead of a parse error.
///
/// ```
/// use rust_service_logger::{LogLevel, LoggerConfig};
///
/// let config: LoggerConfig =
///     serde_json::from_str(r#"{"min_level":"WARN","stacktrace_level":"error"}"#).unwrap();
/// assert_eq!(config.min_level, LogLevel::Warn);
/// assert_eq!(config.stacktrace_level, Some(LogLevel::Error));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Records below this level are discarded before assembly
    #[serde(deserialize_with = "deserialize_lenient_level")]
    pub min_level: LogLevel,

    #[serde(skip)]
    pub output: OutputSink,

    pub encoder: EncoderConfig,

    /// Capture a backtrace for records at or above this level
    #[serde(deserialize_with = "deserialize_lenient_level_opt")]
    pub stacktrace_level: Option<LogLevel>,
}

impl LoggerConfig {
    /// Fold `options` over the defaults, in order.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }
}

fn deserialize_lenient_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(LogLevel::resolve(&name))
}

fn deserialize_lenient_level_opt<'de, D>(deserializer: D) -> Result<Option<LogLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.map(|name| LogLevel::resolve(&name)))
}

/// One construction-time mutation.
#[derive(Debug, Clone)]
pub enum LoggerOption {
    MinLevel(LogLevel),
    Output(OutputSink),
    Encoder(EncoderConfig),
    Stacktrace(LogLevel),
}

impl LoggerOption {
    pub fn apply(self, config: &mut LoggerConfig) {
        match self {
            LoggerOption::MinLevel(level) => config.min_level = level,
            LoggerOption::Output(sink) => config.output = sink,
            LoggerOption::Encoder(encoder) => config.encoder = encoder,
            LoggerOption::Stacktrace(level) => config.stacktrace_level = Some(level),
        }
    }
}

/// Minimum level by name; unknown names fall back to `info`.
pub fn with_level(name: &str) -> LoggerOption {
    LoggerOption::MinLevel(LogLevel::resolve(name))
}

pub fn with_min_level(level: LogLevel) -> LoggerOption {
    LoggerOption::MinLevel(level)
}

/// Replace the default stdout sink.
pub fn with_output(sink: OutputSink) -> LoggerOption {
    LoggerOption::Output(sink)
}

pub fn with_encoder(encoder: EncoderConfig) -> LoggerOption {
    LoggerOption::Encoder(encoder)
}

/// Attach a `stacktrace` to records at or above `level`.
pub fn with_stacktrace(level: LogLevel) -> LoggerOption {
    LoggerOption::Stacktrace(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::SharedBuffer;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert_eq!(config.output.name(), "stdout");
        assert_eq!(config.stacktrace_level, None);
    }

    #[test]
    fn test_last_option_wins() {
        let config = LoggerConfig::from_options([
            with_level("debug"),
            with_level("ERROR"),
        ]);
        assert_eq!(config.min_level, LogLevel::Error);
    }

    #[test]
    fn test_options_touch_only_their_attribute() {
        let sink = OutputSink::named("capture", SharedBuffer::new());
        let config = LoggerConfig::from_options([with_level("warn"), with_output(sink.clone())]);

        assert_eq!(config.min_level, LogLevel::Warn);
        assert!(config.output.same_destination(&sink));
        assert_eq!(config.encoder, EncoderConfig::default());
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = LoggerConfig::from_options([with_level("bogus")]);
        assert_eq!(config.min_level, LogLevel::Info);
    }

    #[test]
    fn test_deserialize_lenient() {
        let config: LoggerConfig = serde_json::from_str(r#"{"min_level":"verbose"}"#).unwrap();
        assert_eq!(config.min_level, LogLevel::Info);

        let config: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.min_level, LogLevel::Info);
        assert_eq!(config.stacktrace_level, None);
    }
}
