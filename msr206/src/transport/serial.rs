// msr206/src/transport/serial.rs

//! Serial transport for a physical (or virtual) MSR206 link.
//!
//! The device speaks 9600 baud 8N1 over RS-232 or a USB serial adapter.
//! Open failure is fatal to the requested operation and is never retried
//! here; retry policy belongs to the caller.

use std::io::{Read, Write};
use std::time::Duration;

use serialport::SerialPort;

use crate::Result;
use crate::transport::traits::Transport;

/// Default baud rate of the MSR206 family.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Transport backed by a `serialport` handle.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open `path` (for example `/dev/ttyUSB0`) at the given baud rate,
    /// 8 data bits, no parity, one stop bit.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(crate::utils::default_poll_timeout())
            .open()?;
        log::debug!("opened serial port {} at {} baud", path, baud_rate);
        Ok(Self { port })
    }

    /// Open with the device's default 9600 baud.
    pub fn open_default(path: &str) -> Result<Self> {
        Self::open(path, DEFAULT_BAUD_RATE)
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive(&mut self, max_len: usize, timeout: Duration) -> Result<Vec<u8>> {
        self.port.set_timeout(timeout)?;

        let mut buf = vec![0u8; max_len];
        match self.port.read(&mut buf) {
            Ok(n) => {
                buf.truncate(n);
                Ok(buf)
            }
            // A timed-out poll means the device had nothing to send; the
            // drain loop treats empty as quiescence, not as an error.
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the handle releases the port; nothing explicit to do.
        Ok(())
    }
}
