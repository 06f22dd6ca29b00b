//! Scripted line source
//!
//! Replays a fixed sequence of lines and then reports a disconnect. Used by
//! the integration tests and by `--features mock-serial` runs, which
//! exercise the chart without an instrument attached.

use std::collections::VecDeque;
use std::time::Duration;

use crate::backend::source::LineSource;
use crate::error::{Result, TempscopeError};

/// [`LineSource`] that hands out a canned list of lines
pub struct ScriptedLineSource {
    lines: VecDeque<String>,
    /// Delay before each line is handed out, simulating device pacing
    delay: Option<Duration>,
}

impl ScriptedLineSource {
    /// Create a source that replays `lines` in order
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            delay: None,
        }
    }

    /// Sleep for `delay` before handing out each line
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Synthetic triangle ramp spanning the 20-30 display band, encoded the
    /// way the instrument encodes readings (integer text, value x 10000)
    pub fn synthetic(samples: usize) -> Self {
        let lines = (0..samples).map(|i| {
            let phase = (i % 200) as i64;
            let reading = if phase < 100 {
                200_000 + phase * 1_000
            } else {
                300_000 - (phase - 100) * 1_000
            };
            reading.to_string()
        });
        Self::new(lines)
    }

    /// Lines remaining in the script
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLineSource {
    fn read_line(&mut self) -> Result<String> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.lines.pop_front().ok_or(TempscopeError::Disconnected)
    }

    fn describe(&self) -> String {
        format!("scripted source ({} lines left)", self.lines.len())
    }
}
