//! Configuration access for the logging subsystem
//!
//! Resource limits are compile-time constants; output format and verbosity
//! are runtime user preferences.

use crate::config::compile_time::logging::LOG_BUFFER_SIZE;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Preferences are read from the environment once, on first use
fn runtime_preferences() -> &'static LoggingPreferences {
    RUNTIME_PREFERENCES.get_or_init(LoggingPreferences::default)
}

/// Get minimum log level (user preference)
pub fn get_min_log_level() -> EventsLogLevel {
    runtime_preferences().min_log_level.to_events_log_level()
}

/// Check if structured JSON logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    runtime_preferences().use_structured_logging
}

/// Check if console logging is enabled (user preference)
pub fn use_console_logging() -> bool {
    runtime_preferences().enable_console_logging
}

/// Get event buffer size for in-memory loggers (compile-time constant)
pub fn get_event_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Validate current configuration settings
pub fn validate_config() -> Result<(), String> {
    if LOG_BUFFER_SIZE < 100 {
        return Err(format!("Log buffer size too small: {}", LOG_BUFFER_SIZE));
    }

    if LOG_BUFFER_SIZE > 1_000_000 {
        return Err(format!("Log buffer size too large: {}", LOG_BUFFER_SIZE));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_buffer_size_constant() {
        assert!(get_event_buffer_size() >= 100);
    }
}
