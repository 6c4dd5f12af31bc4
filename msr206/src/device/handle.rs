// msr206/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Instant;

use log::{debug, trace};

use crate::Result;
use crate::device::config::{DrainPolicy, ExchangeConfig};
use crate::protocol::{Command, ResponseOutcome, classify_status, decode_raw, decode_tracks};
use crate::transport::Transport;
use crate::types::{Coercivity, TrackSet};
use crate::utils::bytes_to_hex;

/// Type-state marker for a handle that has not yet reset the device
pub struct Uninitialized;
/// Type-state marker for a handle whose device has been reset
pub struct Initialized;

/// Device handle that enforces initialization state at compile time.
///
/// One exchange (encode, send, drain, decode) runs to completion on the
/// caller's thread; the handle assumes exclusive use of its transport and
/// provides no internal locking or retries.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: ExchangeConfig,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance. This is the
    /// only entry point; tests hand in a MockTransport here.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            config: ExchangeConfig::default(),
            _state: PhantomData,
        }
    }

    /// Replace the exchange configuration before initializing.
    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    /// Initialize the device: send a reset and drain whatever the device
    /// answers. The device acknowledges reset loosely (or not at all), so
    /// any drained reply is accepted.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        let frame = Command::Reset.encode()?;
        self.transport.send(&frame)?;
        let drained = drain(&mut *self.transport, &self.config)?;
        debug!("reset drained {} byte(s)", drained.len());

        Ok(Device {
            transport: self.transport,
            config: self.config,
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Read the decoded ISO tracks from the next swipe.
    pub fn read_tracks(&mut self) -> Result<ResponseOutcome> {
        let data = self.exchange(&Command::ReadTracks)?;
        Ok(decode_tracks(&data))
    }

    /// Write the given tracks on the next swipe.
    pub fn write_tracks(&mut self, tracks: &TrackSet) -> Result<ResponseOutcome> {
        let data = self.exchange(&Command::WriteTracks(tracks.clone()))?;
        Ok(classify_status(&data))
    }

    /// Read the raw stripe data from the next swipe, as lowercase hex.
    pub fn read_raw(&mut self) -> Result<ResponseOutcome> {
        let data = self.exchange(&Command::ReadRaw)?;
        Ok(decode_raw(&data))
    }

    /// Write a raw payload given as an even-length hex string.
    pub fn write_raw(&mut self, hex_payload: &str) -> Result<ResponseOutcome> {
        let data = self.exchange(&Command::WriteRaw(hex_payload.to_string()))?;
        Ok(classify_status(&data))
    }

    /// Switch the device's write strength.
    pub fn set_coercivity(&mut self, mode: Coercivity) -> Result<ResponseOutcome> {
        debug!("switching to {}", mode.label());
        let data = self.exchange(&Command::set_coercivity(mode))?;
        Ok(classify_status(&data))
    }

    /// Reset the device to its idle state.
    pub fn reset(&mut self) -> Result<ResponseOutcome> {
        let data = self.exchange(&Command::Reset)?;
        Ok(classify_status(&data))
    }

    /// The active exchange configuration.
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Consume the handle and close the transport.
    pub fn close(mut self) -> Result<()> {
        self.transport.close()
    }

    /// One full exchange: encode, send, drain.
    fn exchange(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let frame = cmd.encode()?;
        debug!("sending command {:02x}: {}", cmd.code(), bytes_to_hex(&frame));
        self.transport.send(&frame)?;

        let data = drain(&mut *self.transport, &self.config)?;
        debug!("response: {} byte(s): {}", data.len(), bytes_to_hex(&data));
        Ok(data)
    }
}

/// Idle-window drain: accumulate chunks until quiescence.
///
/// Completion is inferred from inactivity because the protocol carries no
/// length prefix. The policy decides whether one empty poll already means
/// quiescence or only the window expiring does.
fn drain(transport: &mut dyn Transport, config: &ExchangeConfig) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    let start = Instant::now();

    while start.elapsed() < config.idle_window {
        let chunk = transport.receive(config.read_chunk, config.poll_timeout)?;
        if chunk.is_empty() {
            match config.drain_policy {
                DrainPolicy::StopOnFirstEmpty => break,
                DrainPolicy::WaitFullWindow => continue,
            }
        }
        trace!("chunk: {}", bytes_to_hex(&chunk));
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}
