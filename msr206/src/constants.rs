// msr206/src/constants.rs
//! Common protocol constants used across the crate

/// Escape byte that introduces every MSR206 command and control token
pub const ESC: u8 = 0x1B;

/// Field separator: ends a track in read responses and write payloads
pub const FIELD_SEPARATOR: u8 = b'?';

/// Terminator byte that ends a multi-field write payload
pub const TERMINATOR: u8 = 0x1C;

/// Control token selecting track 1 inside a WriteTracks payload
pub const TRACK1_TAG: u8 = 0x01;
/// Control token selecting track 2 inside a WriteTracks payload
pub const TRACK2_TAG: u8 = 0x02;
/// Control token selecting track 3 inside a WriteTracks payload
pub const TRACK3_TAG: u8 = 0x03;

/// Status byte the device sends after `ESC` to report success
pub const STATUS_OK: u8 = b'0';

/// Maximum bytes requested from the transport per poll while draining
pub const DEFAULT_READ_CHUNK: usize = 1024;
