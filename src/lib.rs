//! # Tempscope: serial strip-chart monitor
//!
//! A real-time display for a serial-attached lab instrument that emits
//! newline-delimited integer readings. Samples scroll across a fixed-width
//! "Temp vs time" window; closing the window ends the run.
//!
//! ## Architecture
//!
//! - **Backend**: Serial line acquisition behind the [`backend::LineSource`]
//!   seam, the parse rules, and the pull-based [`backend::Sampler`]
//! - **Frontend**: Renders the UI using eframe/egui with egui_plot for the
//!   strip chart
//! - **Config**: Compiled-in instrument defaults with an optional TOML
//!   override file
//!
//! The sampler and the chart share one thread: the UI update loop owns the
//! sampling timer and pulls a single sample per tick, suspending on the
//! blocking line read while the device is silent.
//!
//! ## Example
//!
//! ```ignore
//! use tempscope::{
//!     backend::{Sampler, SerialLineSource},
//!     config::AppConfig,
//!     frontend::TempscopeApp,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load_or_default();
//!     let source = SerialLineSource::open(&config.serial)?;
//!     let sampler = Sampler::new(source);
//!
//!     let native_options = eframe::NativeOptions::default();
//!     eframe::run_native(
//!         "Temp vs time",
//!         native_options,
//!         Box::new(move |_cc| Ok(Box::new(TempscopeApp::new(&config, sampler)))),
//!     )?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod frontend;
pub mod types;

// Re-export commonly used types
pub use backend::{LineSource, Sampler, ScriptedLineSource, SerialLineSource};
pub use config::AppConfig;
pub use error::{Result, TempscopeError};
pub use frontend::TempscopeApp;
pub use types::{Sample, Trace};
