// msr206/src/protocol/response.rs

use crate::constants::{ESC, FIELD_SEPARATOR, STATUS_OK};
use crate::types::TrackSet;
use crate::utils::bytes_to_hex;

/// Status codes the device reports after a control command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusCode {
    /// `'1'`: write or read error
    ReadWriteError,
    /// `'2'`: command format error
    FormatError,
    /// `'4'`: invalid command
    InvalidCommand,
    /// `'9'`: invalid card swipe while in write mode
    InvalidSwipeInWriteMode,
}

impl StatusCode {
    /// Map a raw status byte to its code. `b'0'` is success and has no
    /// `StatusCode`; unknown bytes return `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'1' => Some(Self::ReadWriteError),
            b'2' => Some(Self::FormatError),
            b'4' => Some(Self::InvalidCommand),
            b'9' => Some(Self::InvalidSwipeInWriteMode),
            _ => None,
        }
    }

    /// The raw status byte for this code.
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::ReadWriteError => b'1',
            Self::FormatError => b'2',
            Self::InvalidCommand => b'4',
            Self::InvalidSwipeInWriteMode => b'9',
        }
    }

    /// Human-readable description, as shown to the operator.
    pub fn message(&self) -> &'static str {
        match self {
            Self::ReadWriteError => "write or read error",
            Self::FormatError => "command format error",
            Self::InvalidCommand => "invalid command",
            Self::InvalidSwipeInWriteMode => "invalid card swipe when in write mode",
        }
    }
}

/// Classification of one drained response.
///
/// Total over every byte sequence the transport can return, including the
/// empty one; produced fresh per response and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseOutcome {
    /// The device acknowledged the operation.
    Success,
    /// The device reported a recognized failure status.
    DeviceError(StatusCode),
    /// The device returned a status byte outside the known table.
    UnknownStatus(u8),
    /// The device sent nothing within the idle window.
    NoResponse,
    /// Decoded track data after a ReadTracks exchange.
    TrackData(TrackSet),
    /// Raw stripe data after a ReadRaw exchange, as lowercase hex.
    RawData(String),
    /// The response bytes were not valid text; raw bytes preserved.
    DecodeFailure(Vec<u8>),
}

/// Classify a status reply (the response to any control command).
///
/// Order-sensitive: the success-frame check runs first because a valid
/// `ESC .. ESC '0'` frame also satisfies the "starts with ESC and longer
/// than two bytes" rule.
pub fn classify_status(data: &[u8]) -> ResponseOutcome {
    if data.first() == Some(&ESC) && data.ends_with(&[ESC, STATUS_OK]) {
        return ResponseOutcome::Success;
    }

    if data.first() == Some(&ESC) && data.len() > 2 {
        let status = data[data.len() - 1];
        if status == STATUS_OK {
            return ResponseOutcome::Success;
        }
        return match StatusCode::from_byte(status) {
            Some(code) => ResponseOutcome::DeviceError(code),
            None => ResponseOutcome::UnknownStatus(status),
        };
    }

    ResponseOutcome::NoResponse
}

/// Decode a ReadTracks response into track text.
///
/// Never fails past the caller: undecodable bytes come back as
/// `DecodeFailure`, an empty drain as `NoResponse`.
pub fn decode_tracks(data: &[u8]) -> ResponseOutcome {
    if data.is_empty() {
        return ResponseOutcome::NoResponse;
    }

    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return ResponseOutcome::DecodeFailure(data.to_vec()),
    };

    let cleaned = strip_control_runs(text);
    let mut fields = cleaned.split(FIELD_SEPARATOR as char);
    let track1 = fields.next().unwrap_or("").trim().to_string();
    let track2 = fields.next().unwrap_or("").trim().to_string();
    let track3 = fields.next().unwrap_or("").trim().to_string();

    ResponseOutcome::TrackData(TrackSet {
        track1,
        track2,
        track3,
    })
}

/// Decode a ReadRaw response.
///
/// No text interpretation: the bytes are rendered one-to-one as lowercase
/// hex, reversible by the write-raw path.
pub fn decode_raw(data: &[u8]) -> ResponseOutcome {
    if data.is_empty() {
        return ResponseOutcome::NoResponse;
    }
    ResponseOutcome::RawData(bytes_to_hex(data))
}

/// Drop escape-introduced control runs, keeping only printable ASCII.
///
/// Each `ESC` and the unprintable bytes following it (track tags, status
/// tails) disappear; stray control bytes outside an escape run are dropped
/// the same way, so the result is clean track text ready for splitting.
fn strip_control_runs(text: &str) -> String {
    text.chars().filter(|c| (' '..='~').contains(c)).collect()
}
