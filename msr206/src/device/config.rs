// msr206/src/device/config.rs

use std::time::Duration;

use crate::constants::DEFAULT_READ_CHUNK;
use crate::utils::{default_idle_window, default_poll_timeout};

/// What the drain loop does when a poll comes back empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrainPolicy {
    /// Stop on the first empty poll: the device has nothing more to send
    /// right now. Matches the device's burst-style replies.
    #[default]
    StopOnFirstEmpty,
    /// Keep polling through empty reads until the idle window elapses.
    /// Useful when the device pauses before answering, e.g. while waiting
    /// for a swipe.
    WaitFullWindow,
}

/// Tuning knobs for one command/response exchange.
///
/// The protocol has no length prefix, so response completion is inferred
/// from inactivity; every knob of that inference lives here rather than in
/// hardcoded constants.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    /// Upper bound on the whole drain; callers must tolerate this worst
    /// case latency on every request
    pub idle_window: Duration,
    /// How long each individual poll waits for bytes
    pub poll_timeout: Duration,
    /// Maximum bytes requested per poll
    pub read_chunk: usize,
    /// Empty-poll handling
    pub drain_policy: DrainPolicy,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            idle_window: default_idle_window(),
            poll_timeout: default_poll_timeout(),
            read_chunk: DEFAULT_READ_CHUNK,
            drain_policy: DrainPolicy::default(),
        }
    }
}

impl ExchangeConfig {
    /// Default configuration with a different idle window.
    pub fn with_idle_window(idle_window: Duration) -> Self {
        Self {
            idle_window,
            ..Self::default()
        }
    }
}
