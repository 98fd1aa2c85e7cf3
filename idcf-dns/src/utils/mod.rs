//! Utility modules.

/// Timestamp parsing for API resource fields.
pub mod datetime;

/// Log sanitization utilities to keep bodies short and secrets out of logs.
pub mod log_sanitizer;
