//! LineSource trait for unified line acquisition
//!
//! This module provides a common trait for everything that can produce
//! newline-terminated text lines, enabling both the real serial port and
//! scripted sources for testing.

#[cfg(test)]
use mockall::automock;

use crate::error::Result;

/// Blocking source of newline-terminated text lines
///
/// Implementations must be `Send` so a source opened during startup can be
/// handed to the UI thread.
#[cfg_attr(test, automock)]
pub trait LineSource: Send {
    /// Block until a full line is available and return it with trailing
    /// whitespace removed.
    ///
    /// Device silence is not an error: the call simply does not return
    /// until a line arrives. EOF on the underlying stream yields
    /// [`crate::error::TempscopeError::Disconnected`].
    fn read_line(&mut self) -> Result<String>;

    /// Human-readable description of the source, used in logs
    fn describe(&self) -> String {
        "line source".to_string()
    }
}
