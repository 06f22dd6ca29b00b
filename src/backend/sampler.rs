//! Pull-based sampler
//!
//! Couples a [`LineSource`] to the live parse rule and stamps each reading
//! with a strictly increasing tick. The UI pulls one sample per timer tick;
//! the pull blocks while the device is silent.

use crate::backend::parse;
use crate::backend::source::LineSource;
use crate::error::Result;
use crate::types::{Sample, SENTINEL_TICK};

/// Produces stamped samples from a line source on demand
pub struct Sampler<S> {
    source: S,
    /// Tick of the most recent pull; the sentinel before the first
    tick: i64,
}

impl<S: LineSource> Sampler<S> {
    /// Create a sampler over `source` with the tick at the sentinel
    pub fn new(source: S) -> Self {
        Self {
            source,
            tick: SENTINEL_TICK,
        }
    }

    /// Tick of the most recent pull, or the sentinel before the first
    pub fn tick(&self) -> i64 {
        self.tick
    }

    /// Block for the next line and return it as a stamped sample.
    ///
    /// Errors from the source or the parse rule propagate unchanged; the
    /// caller decides whether to latch them. The tick is consumed even when
    /// the read or the parse fails.
    pub fn next_sample(&mut self) -> Result<Sample> {
        self.tick += 1;
        let line = self.source.read_line()?;
        let value = parse::live_value(&line)?;
        Ok(Sample::new(self.tick, value))
    }

    /// Description of the underlying source, for logs
    pub fn describe_source(&self) -> String {
        self.source.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::scripted::ScriptedLineSource;
    use crate::backend::source::MockLineSource;
    use crate::error::TempscopeError;

    #[test]
    fn test_ticks_start_at_zero_and_increment() {
        let source = ScriptedLineSource::new(["5000", "10000", "15000"]);
        let mut sampler = Sampler::new(source);
        assert_eq!(sampler.tick(), SENTINEL_TICK);

        assert_eq!(sampler.next_sample().unwrap(), Sample::new(0, 0.5));
        assert_eq!(sampler.next_sample().unwrap(), Sample::new(1, 1.0));
        assert_eq!(sampler.next_sample().unwrap(), Sample::new(2, 1.5));
        assert_eq!(sampler.tick(), 2);
    }

    #[test]
    fn test_parse_failure_propagates() {
        let source = ScriptedLineSource::new(["5000", "abc"]);
        let mut sampler = Sampler::new(source);
        sampler.next_sample().unwrap();
        assert!(matches!(
            sampler.next_sample(),
            Err(TempscopeError::ParseLine { .. })
        ));
    }

    #[test]
    fn test_tick_consumed_on_failure() {
        let source = ScriptedLineSource::new(["abc", "5000"]);
        let mut sampler = Sampler::new(source);
        assert!(sampler.next_sample().is_err());
        // The next good line lands on tick 1, not 0.
        assert_eq!(sampler.next_sample().unwrap(), Sample::new(1, 0.5));
    }

    #[test]
    fn test_read_failure_propagates() {
        let mut source = MockLineSource::new();
        source
            .expect_read_line()
            .times(1)
            .returning(|| Err(TempscopeError::Disconnected));
        let mut sampler = Sampler::new(source);
        assert!(matches!(
            sampler.next_sample(),
            Err(TempscopeError::Disconnected)
        ));
    }
}
