// msr206/src/prelude.rs

//! Convenience re-exports for the common surface of the crate.

pub use crate::card::{
    CardBrand, CardGenerator, CardProfile, GeneratedCard, Track1Layout, TrackFields,
};
pub use crate::device::{Device, DrainPolicy, ExchangeConfig, Initialized, Uninitialized};
pub use crate::error::{Error, Result};
pub use crate::protocol::{Command, ResponseOutcome, StatusCode};
pub use crate::transport::{MockTransport, Transport};
pub use crate::types::{Coercivity, TrackSet};

// Re-export small utilities for convenience
pub use crate::utils::{
    bytes_to_hex, bytes_to_hex_spaced, default_idle_window, default_poll_timeout, ms, parse_hex,
};
