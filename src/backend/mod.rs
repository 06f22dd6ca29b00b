//! Backend module for serial line acquisition
//!
//! This module owns everything between the serial port and the chart: the
//! [`LineSource`] seam, the real serial implementation, a scripted source
//! for tests and instrument-free runs, the line parse rules, and the
//! pull-based [`Sampler`] the UI drives once per timer tick.
//!
//! # Architecture
//!
//! Acquisition is pull-based and single-threaded: the UI update loop calls
//! [`Sampler::next_sample`], which performs one blocking line read and one
//! parse. Device silence therefore stalls the caller; there is no worker
//! thread and no channel.
//!
//! # Components
//!
//! - [`LineSource`] - One-operation trait over the hardware (blocking line read)
//! - [`SerialLineSource`] - Real serial port implementation
//! - [`ScriptedLineSource`] - Canned-line source for tests and `mock-serial` runs
//! - [`parse`] - The live parse rule and the two startup preview rules
//! - [`Sampler`] - Couples a source to the live rule and stamps ticks

pub mod parse;
pub mod sampler;
pub mod scripted;
pub mod serial;
pub mod source;

pub use sampler::Sampler;
pub use scripted::ScriptedLineSource;
pub use serial::SerialLineSource;
pub use source::LineSource;
