// msr206/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The transport could not be opened or went away mid-exchange.
    #[error("connection error: {0}")]
    Connection(String),

    // serialport 実装を後から有効化できるように optional dependency にしている
    /// Underlying serial port failure.
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// I/O failure inside a transport implementation.
    #[error("transport i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Track content contains a byte reserved by the wire protocol.
    #[error("track {track} contains reserved byte {byte:#04x}")]
    ReservedTrackByte {
        /// 1-based track number the offending field maps to
        track: u8,
        /// the reserved byte that was found
        byte: u8,
    },

    /// Raw write payload is not an even-length hex string.
    #[error("hex payload has odd length {len}")]
    OddHexLength {
        /// length of the rejected payload
        len: usize,
    },

    /// Raw write payload contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {ch:?} at offset {offset}")]
    InvalidHexDigit {
        /// the rejected character
        ch: char,
        /// byte offset within the payload
        offset: usize,
    },

    /// Card number input contains a character that is not an ASCII digit.
    #[error("non-digit character {ch:?} in card number")]
    NonDigit {
        /// the rejected character
        ch: char,
    },

    /// Requested card brand is not in the profile registry.
    #[error("unsupported card brand: {0}")]
    UnsupportedBrand(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
