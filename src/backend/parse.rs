//! Sample line parsing
//!
//! Three rules operate on a trimmed instrument line. The live path uses
//! [`live_value`] exclusively. The two preview rules survive from the
//! instrument bring-up procedure and are consulted only by the startup
//! diagnostic in [`preview`]; they are intentionally not reconciled with
//! the live rule.

use crate::backend::source::LineSource;
use crate::error::{Result, TempscopeError};

/// Divisor applied to the integer payload on the live path
const LIVE_SCALE: f64 = 10_000.0;

/// Divisor applied by the scaled preview rule
const PREVIEW_SCALE: f64 = 100.0;

/// Parse a full line as an integer reading scaled by 1/10000.
///
/// This is the authoritative rule: every charted sample goes through it.
pub fn live_value(line: &str) -> Result<f64> {
    let raw: i64 = line
        .trim()
        .parse()
        .map_err(|e| TempscopeError::parse(line, e))?;
    Ok(raw as f64 / LIVE_SCALE)
}

/// Preview rule A: drop the first character and the last two, parse the
/// remainder as an integer
pub fn preview_int(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    let count = trimmed.chars().count();
    if count < 4 {
        return Err(TempscopeError::parse(line, "too short for sliced preview"));
    }
    let inner: String = trimmed.chars().skip(1).take(count - 3).collect();
    inner.parse().map_err(|e| TempscopeError::parse(line, e))
}

/// Preview rule B: parse the whole line as a float scaled by 1/100
pub fn preview_scaled(line: &str) -> Result<f64> {
    let raw: f64 = line
        .trim()
        .parse()
        .map_err(|e| TempscopeError::parse(line, e))?;
    Ok(raw / PREVIEW_SCALE)
}

/// Log a diagnostic preview of the first `count` lines.
///
/// Each line is run through both preview rules and the results logged.
/// Preview parse failures are warnings, not fatal: a line neither preview
/// rule accepts can still be a valid live sample. Read failures propagate,
/// since without a producing device there is nothing to chart.
pub fn preview<S: LineSource>(source: &mut S, count: usize) -> Result<()> {
    for index in 0..count {
        let line = source.read_line()?;
        match (preview_int(&line), preview_scaled(&line)) {
            (Ok(yh), Ok(yf)) => {
                tracing::debug!(index, line = %line, yh, yf, "preview sample");
            }
            (yh, yf) => {
                if let Err(e) = yh {
                    tracing::warn!(index, error = %e, "sliced preview parse failed");
                }
                if let Err(e) = yf {
                    tracing::warn!(index, error = %e, "scaled preview parse failed");
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::scripted::ScriptedLineSource;
    use proptest::prelude::*;

    #[test]
    fn test_live_value_scales_by_ten_thousand() {
        assert_eq!(live_value("5000").unwrap(), 0.5);
        assert_eq!(live_value("10000").unwrap(), 1.0);
        assert_eq!(live_value("253700").unwrap(), 25.37);
        assert_eq!(live_value("-5000").unwrap(), -0.5);
    }

    #[test]
    fn test_live_value_tolerates_surrounding_whitespace() {
        assert_eq!(live_value("  250000 ").unwrap(), 25.0);
    }

    #[test]
    fn test_live_value_rejects_non_integers() {
        assert!(matches!(
            live_value("abc"),
            Err(TempscopeError::ParseLine { .. })
        ));
        assert!(matches!(
            live_value("25.5"),
            Err(TempscopeError::ParseLine { .. })
        ));
        assert!(matches!(
            live_value(""),
            Err(TempscopeError::ParseLine { .. })
        ));
    }

    #[test]
    fn test_preview_int_slices_ends() {
        // Drops the first character and the last two.
        assert_eq!(preview_int("A1234BC").unwrap(), 1234);
        assert_eq!(preview_int("9876").unwrap(), 8);
    }

    #[test]
    fn test_preview_int_rejects_short_lines() {
        assert!(preview_int("123").is_err());
        assert!(preview_int("").is_err());
    }

    #[test]
    fn test_preview_scaled_divides_by_hundred() {
        assert_eq!(preview_scaled("2500").unwrap(), 25.0);
        assert_eq!(preview_scaled("2537.5").unwrap(), 25.375);
    }

    #[test]
    fn test_preview_logs_without_consuming_extra_lines() {
        let mut source = ScriptedLineSource::new(["abc", "2500", "x123yz"]);
        preview(&mut source, 2).unwrap();
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_preview_propagates_read_failure() {
        let mut source = ScriptedLineSource::new(["2500"]);
        assert!(matches!(
            preview(&mut source, 2),
            Err(TempscopeError::Disconnected)
        ));
    }

    proptest! {
        #[test]
        fn prop_live_value_is_exact_division(raw in any::<i64>()) {
            let line = raw.to_string();
            prop_assert_eq!(live_value(&line).unwrap(), raw as f64 / 10_000.0);
        }

        #[test]
        fn prop_live_value_never_panics(line in ".*") {
            let _ = live_value(&line);
            let _ = preview_int(&line);
            let _ = preview_scaled(&line);
        }
    }
}
