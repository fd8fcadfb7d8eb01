//! A single assembled log record

use super::field::Field;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::panic::Location;

/// Everything needed to encode one line.
///
/// Borrowed from the emitting logger and the call arguments; it only lives
/// for the duration of one emit call.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub logger_name: &'a str,
    pub caller: &'static Location<'static>,
    pub message: &'a str,
    pub service_name: &'a str,
    /// Fields accumulated on the logger, in attachment order
    pub context: &'a [Field],
    /// Fields passed to the emit call, in call order
    pub fields: &'a [Field],
    pub stacktrace: Option<String>,
}

impl<'a> Record<'a> {
    #[track_caller]
    pub fn new(level: LogLevel, message: &'a str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            logger_name: "",
            caller: Location::caller(),
            message,
            service_name: "",
            context: &[],
            fields: &[],
            stacktrace: None,
        }
    }

    /// All user fields: logger context first, then call fields.
    pub fn all_fields(&self) -> impl Iterator<Item = &'a Field> {
        self.context.iter().chain(self.fields.iter())
    }
}
