//! # Rust Service Logger
//!
//! A structured, level-filtered logging facade that writes one JSON object
//! per line.
//!
//! ## Features
//!
//! - **Immutable Loggers**: attaching fields derives a new logger and never
//!   changes the original
//! - **Cheap Filtering**: records below the minimum level are dropped before
//!   anything is allocated
//! - **Thread Safe**: every derived logger shares one synchronized sink, so
//!   lines never interleave
//! - **Fixed Schema**: `timestamp`, `level`, `logger`, `caller`, `msg`,
//!   `stacktrace` and `service-name` keys on every record

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        field, should_emit, with_encoder, with_level, with_min_level, with_output,
        with_stacktrace, CallerFormat, DurationFormat, EncoderConfig, Field, FieldValue,
        LevelCase, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        LoggerOption, OutputSink, RecordKeys, Result, SharedBuffer, TimestampFormat,
    };
}

pub use core::{
    field, should_emit, with_encoder, with_level, with_min_level, with_output, with_stacktrace,
    CallerFormat, DurationFormat, EncoderConfig, Field, FieldValue, LevelCase, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerOption, OutputSink, Record,
    RecordKeys, Result, SharedBuffer, TimestampFormat,
};
