// msr206/src/protocol/commands.rs

use crate::constants::{
    ESC, FIELD_SEPARATOR, TERMINATOR, TRACK1_TAG, TRACK2_TAG, TRACK3_TAG,
};
use crate::types::{Coercivity, TrackSet};
use crate::utils::parse_hex;
use crate::{Error, Result};

/// High-level Command enum covering the supported MSR206 operation set.
///
/// A value exists only for the duration of one encode call; construction is
/// cheap and encoding is deterministic.
#[derive(Debug, Clone)]
pub enum Command {
    /// Read the decoded ISO tracks from the next swipe
    ReadTracks,
    /// Write the given tracks on the next swipe
    WriteTracks(TrackSet),
    /// Read the raw (undecoded) stripe data from the next swipe
    ReadRaw,
    /// Write a raw payload, given as an even-length hex string
    WriteRaw(String),
    /// Switch the write strength to LO-CO
    SetLowCoercivity,
    /// Switch the write strength to HI-CO
    SetHighCoercivity,
    /// Reset the device to its idle state
    Reset,
}

impl Command {
    /// Return the command letter that follows the leading `ESC`.
    pub fn code(&self) -> u8 {
        match self {
            Self::ReadTracks => b'r',
            Self::WriteTracks(_) => b'w',
            Self::ReadRaw => b'm',
            Self::WriteRaw(_) => b'n',
            Self::SetLowCoercivity => b'y',
            Self::SetHighCoercivity => b'x',
            Self::Reset => b'a',
        }
    }

    /// Convenience constructor for the two coercivity commands.
    pub fn set_coercivity(mode: Coercivity) -> Self {
        match mode {
            Coercivity::Low => Self::SetLowCoercivity,
            Coercivity::High => Self::SetHighCoercivity,
        }
    }

    /// Encode the command into the escape-coded byte sequence sent on the
    /// wire.
    ///
    /// Field content is validated before any byte is emitted: track text
    /// containing a reserved protocol byte and raw payloads that are not
    /// even-length hex are rejected here, before any transport I/O.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::WriteTracks(tracks) => encode_write_tracks(tracks),
            Self::WriteRaw(hex_payload) => encode_write_raw(hex_payload),
            simple => Ok(vec![ESC, simple.code()]),
        }
    }
}

/// Encode WriteTracks:
/// `ESC 'w' ESC 's' ESC 0x01 t1 ESC 0x02 t2 ESC 0x03 t3 '?' FS`
fn encode_write_tracks(tracks: &TrackSet) -> Result<Vec<u8>> {
    validate_track(1, &tracks.track1)?;
    validate_track(2, &tracks.track2)?;
    validate_track(3, &tracks.track3)?;

    let mut buf = Vec::with_capacity(10 + tracks.track1.len() + tracks.track2.len() + tracks.track3.len());
    buf.extend_from_slice(&[ESC, b'w', ESC, b's']);
    for (tag, text) in [
        (TRACK1_TAG, &tracks.track1),
        (TRACK2_TAG, &tracks.track2),
        (TRACK3_TAG, &tracks.track3),
    ] {
        buf.push(ESC);
        buf.push(tag);
        buf.extend_from_slice(text.as_bytes());
    }
    buf.push(FIELD_SEPARATOR);
    buf.push(TERMINATOR);
    Ok(buf)
}

/// Encode WriteRaw: `ESC 'n' <hex ascii> FS`
fn encode_write_raw(hex_payload: &str) -> Result<Vec<u8>> {
    // Validate only; the device expects the hex text itself on the wire.
    parse_hex(hex_payload)?;

    let mut buf = Vec::with_capacity(3 + hex_payload.len());
    buf.push(ESC);
    buf.push(b'n');
    buf.extend_from_slice(hex_payload.as_bytes());
    buf.push(TERMINATOR);
    Ok(buf)
}

/// Reject track text that would break the command framing.
///
/// `ESC` and the terminator are reserved anywhere; the field separator `?`
/// is reserved except as the final byte, where real track data carries it
/// as the end sentinel.
fn validate_track(track: u8, text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        let reserved = b == ESC
            || b == TERMINATOR
            || (b == FIELD_SEPARATOR && i != bytes.len() - 1);
        if reserved {
            return Err(Error::ReservedTrackByte { track, byte: b });
        }
    }
    Ok(())
}
