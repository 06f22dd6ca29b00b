//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

use tempscope::backend::ScriptedLineSource;

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Build a scripted source from string literals
pub fn scripted(lines: &[&str]) -> ScriptedLineSource {
    ScriptedLineSource::new(lines.iter().copied())
}

/// Encode a reading the way the instrument does (value x 10000, integer text)
pub fn encode_reading(value: f64) -> String {
    ((value * 10_000.0).round() as i64).to_string()
}
