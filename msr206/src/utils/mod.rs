//! Utilities for msr206: small, reusable helpers used across the crate.
//!
//! Hex conversion backs the on-screen representation of raw track payloads;
//! the timeout helpers centralize the idle-window defaults of the drain loop.

pub mod hex;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
pub use timeout::*;
