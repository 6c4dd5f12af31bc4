//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the idle-window and poll
//! timeout defaults of the response drain loop and provide a small
//! conversion helper so tests and code can express timeouts in
//! milliseconds clearly.

use std::time::Duration;

/// Default idle window in milliseconds: the drain loop gives up once no
/// data has completed within this bound.
pub const DEFAULT_IDLE_WINDOW_MS: u64 = 5000;

/// Default per-poll read timeout in milliseconds.
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 100;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default idle window as Duration.
pub fn default_idle_window() -> Duration {
    ms(DEFAULT_IDLE_WINDOW_MS)
}

/// Convenience: default per-poll timeout as Duration.
pub fn default_poll_timeout() -> Duration {
    ms(DEFAULT_POLL_TIMEOUT_MS)
}
