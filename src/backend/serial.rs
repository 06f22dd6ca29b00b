//! Serial port line source
//!
//! Opens the instrument port and accumulates bytes until a newline. The
//! port read timeout is used as a poll interval rather than a deadline:
//! timed-out reads retry silently, so `read_line` blocks for as long as the
//! device stays quiet.

use std::io::{ErrorKind, Read};
use std::time::Duration;

use serialport::SerialPort;

use crate::backend::source::LineSource;
use crate::config::SerialConfig;
use crate::error::{Result, TempscopeError};

/// Poll interval for the underlying port reads
const READ_POLL: Duration = Duration::from_millis(100);

/// [`LineSource`] backed by a real serial port
pub struct SerialLineSource {
    port: Box<dyn SerialPort>,
    port_name: String,
    /// Bytes received but not yet terminated by a newline
    pending: Vec<u8>,
}

impl SerialLineSource {
    /// Open the configured port. Failure here is fatal at startup.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let port = serialport::new(&config.port, config.baud_rate)
            .timeout(READ_POLL)
            .data_bits(config.data_bits.into())
            .parity(config.parity.into())
            .stop_bits(config.stop_bits.into())
            .flow_control(serialport::FlowControl::None)
            .open()?;

        tracing::info!(
            port = %config.port,
            baud = config.baud_rate,
            "serial port open"
        );

        Ok(Self {
            port,
            port_name: config.port.clone(),
            pending: Vec::new(),
        })
    }

    /// Pop the first buffered line, if a full one has arrived
    fn take_buffered_line(&mut self) -> Option<String> {
        let pos = self.pending.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.pending.drain(..=pos).collect();
        Some(String::from_utf8_lossy(&line).trim_end().to_string())
    }
}

impl LineSource for SerialLineSource {
    fn read_line(&mut self) -> Result<String> {
        let mut buf = [0u8; 256];
        loop {
            if let Some(line) = self.take_buffered_line() {
                return Ok(line);
            }
            match self.port.read(&mut buf) {
                Ok(0) => return Err(TempscopeError::Disconnected),
                Ok(n) => self.pending.extend_from_slice(&buf[..n]),
                Err(ref e) if e.kind() == ErrorKind::TimedOut => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn describe(&self) -> String {
        format!("serial port {}", self.port_name)
    }
}
