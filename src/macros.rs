//! Logging macros for ergonomic log message formatting.
//!
//! These macros check the level gate before formatting, so arguments of a
//! filtered record are never rendered. Fields can be attached with a leading
//! `fields: [..]` list.
//!
//! # Examples
//!
//! ```
//! use rust_service_logger::prelude::*;
//! use rust_service_logger::info;
//!
//! let logger = Logger::builder("gateway").writer(SharedBuffer::new()).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! info!(logger, fields: [field("port", port), field("tls", true)], "Listener ready");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_service_logger::prelude::*;
/// # let logger = Logger::builder("svc").writer(SharedBuffer::new()).build();
/// use rust_service_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, fields: [field("code", 500)], "Request failed: {}", "timeout");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, fields: [$($field:expr),* $(,)?], $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, &format!($($arg)+), &[$($field),*]);
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, &format!($($arg)+), &[]);
        }
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use rust_service_logger::prelude::*;
/// # let logger = Logger::builder("svc").level("debug").writer(SharedBuffer::new()).build();
/// use rust_service_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use rust_service_logger::prelude::*;
/// # let logger = Logger::builder("svc").writer(SharedBuffer::new()).build();
/// use rust_service_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
