//! Error handling for tempscope
//!
//! This module defines the custom error type and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for tempscope operations
#[derive(Error, Debug)]
pub enum TempscopeError {
    /// Errors from the serial port layer (enumeration, open, configuration)
    #[error("Serial error: {0}")]
    Serial(#[from] serialport::Error),

    /// IO errors while reading from the port
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line that does not parse under the active rule
    #[error("Malformed sample line {line:?}: {reason}")]
    ParseLine { line: String, reason: String },

    /// The device stopped producing data (EOF on the port)
    #[error("Serial device disconnected")]
    Disconnected,

    /// Errors related to configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<TempscopeError>,
    },
}

impl TempscopeError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        TempscopeError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a parse error for a rejected line
    pub fn parse(line: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        TempscopeError::ParseLine {
            line: line.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for tempscope operations
pub type Result<T> = std::result::Result<T, TempscopeError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TempscopeError::Config("missing chart section".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing chart section");
    }

    #[test]
    fn test_error_with_context() {
        let err = TempscopeError::Disconnected;
        let with_ctx = err.with_context("Startup preview failed");
        assert!(with_ctx.to_string().contains("Startup preview failed"));
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(TempscopeError::Disconnected);
        let err = result.context("reading preview line").unwrap_err();
        assert!(err.to_string().starts_with("reading preview line"));
    }

    #[test]
    fn test_parse_error_carries_line() {
        let err = TempscopeError::parse("abc", "invalid digit found in string");
        assert!(err.to_string().contains("\"abc\""));
        assert!(err.to_string().contains("invalid digit"));
    }
}
