// msr206/src/protocol/mod.rs

pub mod commands;
pub mod response;

pub use commands::Command;
pub use response::{ResponseOutcome, StatusCode, classify_status, decode_raw, decode_tracks};
