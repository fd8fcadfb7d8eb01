//! Core logger types

pub mod config;
pub mod encoder;
pub mod error;
pub mod field;
pub mod keys;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod sink;
pub mod timestamp;

pub use config::{
    with_encoder, with_level, with_min_level, with_output, with_stacktrace, LoggerConfig,
    LoggerOption,
};
pub use encoder::{CallerFormat, DurationFormat, EncoderConfig, LevelCase, RecordKeys};
pub use error::{LoggerError, Result};
pub use field::{field, Field, FieldValue};
pub use log_level::{should_emit, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::Record;
pub use sink::{OutputSink, SharedBuffer};
pub use timestamp::TimestampFormat;
