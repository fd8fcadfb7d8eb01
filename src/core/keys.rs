//! Record schema key names
//!
//! Every emitted line carries the reserved keys below. The correlation keys
//! are conventions for user fields and are not reserved.

pub const TIME_KEY: &str = "timestamp";
pub const LEVEL_KEY: &str = "level";
pub const NAME_KEY: &str = "logger";
pub const CALLER_KEY: &str = "caller";
pub const MESSAGE_KEY: &str = "msg";
pub const STACKTRACE_KEY: &str = "stacktrace";
pub const SERVICE_NAME_KEY: &str = "service-name";

pub const CORRELATION_ID_KEY: &str = "correlation-id";
pub const SPAN_ID_KEY: &str = "span-id";
pub const TRACE_ID_KEY: &str = "trace-id";
pub const HOSTNAME_KEY: &str = "hostname";

/// Prefix applied to user field keys that collide with a reserved key.
pub const COLLISION_PREFIX: &str = "fields.";
