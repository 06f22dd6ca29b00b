//! Application configuration
//!
//! Compiled-in defaults mirror the lab instrument: port COM3 at 115200 baud
//! with eight data bits, no parity and two stop bits, a 100-tick chart
//! window displaying 20-30, one sample every 100 ms, and a five-line
//! startup preview.
//!
//! An optional `tempscope.toml` in the platform config directory overrides
//! any subset of these. A missing file is not an error; a malformed one is
//! logged and ignored so a bad edit cannot keep the instrument display from
//! starting.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, TempscopeError};

/// File name of the optional override file
pub const CONFIG_FILE_NAME: &str = "tempscope.toml";

/// Directory under the platform config dir that holds the override file
const CONFIG_DIR_NAME: &str = "tempscope";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Serial link parameters
    pub serial: SerialConfig,
    /// Chart geometry and sampling cadence
    pub chart: ChartConfig,
    /// Number of lines logged by the startup diagnostic preview
    pub preview_lines: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            serial: SerialConfig::default(),
            chart: ChartConfig::default(),
            preview_lines: 5,
        }
    }
}

impl AppConfig {
    /// Load the override file from the platform config directory, falling
    /// back to defaults when it is absent or unreadable
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring bad config file");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| TempscopeError::Config(format!("{}: {e}", path.display())))
    }

    /// Platform-appropriate location of the override file
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

/// Serial link parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Port name, e.g. "COM3" or "/dev/ttyUSB0"
    pub port: String,
    /// Baud rate
    pub baud_rate: u32,
    /// Number of data bits per character
    pub data_bits: DataBits,
    /// Parity checking mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: "COM3".to_string(),
            baud_rate: 115_200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::Two,
        }
    }
}

/// Chart geometry and sampling cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Width of the visible x window in ticks
    pub x_window: u64,
    /// Fixed lower bound of the y axis
    pub y_min: f64,
    /// Fixed upper bound of the y axis
    pub y_max: f64,
    /// Milliseconds between sample pulls
    pub sample_interval_ms: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_window: 100,
            y_min: 20.0,
            y_max: 30.0,
            sample_interval_ms: 100,
        }
    }
}

impl ChartConfig {
    /// The sampling cadence as a [`Duration`]
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }
}

/// Number of data bits per serial character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

impl From<DataBits> for serialport::DataBits {
    fn from(bits: DataBits) -> Self {
        match bits {
            DataBits::Five => serialport::DataBits::Five,
            DataBits::Six => serialport::DataBits::Six,
            DataBits::Seven => serialport::DataBits::Seven,
            DataBits::Eight => serialport::DataBits::Eight,
        }
    }
}

/// Serial parity checking mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    None,
    Even,
    Odd,
}

impl From<Parity> for serialport::Parity {
    fn from(parity: Parity) -> Self {
        match parity {
            Parity::None => serialport::Parity::None,
            Parity::Even => serialport::Parity::Even,
            Parity::Odd => serialport::Parity::Odd,
        }
    }
}

/// Number of serial stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopBits {
    One,
    Two,
}

impl From<StopBits> for serialport::StopBits {
    fn from(bits: StopBits) -> Self {
        match bits {
            StopBits::One => serialport::StopBits::One,
            StopBits::Two => serialport::StopBits::Two,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_instrument() {
        let config = AppConfig::default();
        assert_eq!(config.serial.port, "COM3");
        assert_eq!(config.serial.baud_rate, 115_200);
        assert_eq!(config.serial.data_bits, DataBits::Eight);
        assert_eq!(config.serial.parity, Parity::None);
        assert_eq!(config.serial.stop_bits, StopBits::Two);
        assert_eq!(config.chart.x_window, 100);
        assert_eq!(config.chart.y_min, 20.0);
        assert_eq!(config.chart.y_max, 30.0);
        assert_eq!(config.chart.sample_interval(), Duration::from_millis(100));
        assert_eq!(config.preview_lines, 5);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [serial]
            port = "/dev/ttyUSB0"
            "#,
        )
        .unwrap();
        assert_eq!(config.serial.port, "/dev/ttyUSB0");
        assert_eq!(config.serial.baud_rate, 115_200);
        assert_eq!(config.chart.x_window, 100);
    }

    #[test]
    fn test_enum_spellings() {
        let config: AppConfig = toml::from_str(
            r#"
            [serial]
            parity = "even"
            stop_bits = "one"
            data_bits = "seven"
            "#,
        )
        .unwrap();
        assert_eq!(config.serial.parity, Parity::Even);
        assert_eq!(config.serial.stop_bits, StopBits::One);
        assert_eq!(config.serial.data_bits, DataBits::Seven);
    }
}
