// msr206/src/device/mod.rs

pub mod config;
pub mod handle;

pub use config::{DrainPolicy, ExchangeConfig};
pub use handle::{Device, Initialized, Uninitialized};
