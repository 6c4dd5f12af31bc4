// msr206/src/transport/traits.rs

use std::time::Duration;

use crate::Result;

/// Transport trait abstracts the serial link away from protocol/device
/// logic.
///
/// The device protocol has no length prefix, so `receive` is a bounded
/// poll: it returns whatever bytes arrive within `timeout`, up to
/// `max_len`, and an empty vector when nothing arrived. Empty is a normal
/// result, never an error — the drain loop in the device handle decides
/// what it means.
pub trait Transport {
    /// Send raw bytes to the device.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive up to `max_len` bytes, waiting at most `timeout`.
    fn receive(&mut self, max_len: usize, timeout: Duration) -> Result<Vec<u8>>;

    /// Release the underlying link. Default implementation is a no-op for
    /// transports with nothing to tear down.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
