#[path = "../common/mod.rs"]
mod common;

use msr206::protocol::{ResponseOutcome, decode_raw, decode_tracks};
use msr206::utils::{bytes_to_hex, parse_hex};
use proptest::prelude::*;

#[test]
fn three_field_split() {
    match decode_tracks(b"TRACK1DATA?TRACK2DATA?TRACK3DATA?") {
        ResponseOutcome::TrackData(t) => {
            assert_eq!(t.track1, "TRACK1DATA");
            assert_eq!(t.track2, "TRACK2DATA");
            assert_eq!(t.track3, "TRACK3DATA");
        }
        other => panic!("expected TrackData, got {:?}", other),
    }
}

#[test]
fn missing_fields_are_empty() {
    match decode_tracks(b"ONLY?") {
        ResponseOutcome::TrackData(t) => {
            assert_eq!(t.track1, "ONLY");
            assert_eq!(t.track2, "");
            assert_eq!(t.track3, "");
        }
        other => panic!("expected TrackData, got {:?}", other),
    }
}

#[test]
fn realistic_swipe_response() {
    match decode_tracks(&common::fixtures::track_response()) {
        ResponseOutcome::TrackData(t) => {
            assert_eq!(t.track1, "%B4111111111111111^CARDHOLDER/NAME^2512101");
            assert_eq!(t.track2, ";4111111111111111=2512101");
            assert_eq!(t.track3, "");
        }
        other => panic!("expected TrackData, got {:?}", other),
    }
}

#[test]
fn fields_are_whitespace_trimmed() {
    match decode_tracks(b" A ? B ? C ?") {
        ResponseOutcome::TrackData(t) => {
            assert_eq!(t.track1, "A");
            assert_eq!(t.track2, "B");
            assert_eq!(t.track3, "C");
        }
        other => panic!("expected TrackData, got {:?}", other),
    }
}

#[test]
fn undecodable_bytes_fall_back_to_raw() {
    let raw = vec![0x1B, 0xC3, 0x28, 0xFF];
    match decode_tracks(&raw) {
        ResponseOutcome::DecodeFailure(bytes) => assert_eq!(bytes, raw),
        other => panic!("expected DecodeFailure, got {:?}", other),
    }
}

#[test]
fn raw_decode_matches_hex_crate() {
    let data = [0x00u8, 0x1B, 0xA5, 0xFF];
    match decode_raw(&data) {
        ResponseOutcome::RawData(s) => assert_eq!(s, hex::encode(data)),
        other => panic!("expected RawData, got {:?}", other),
    }
}

proptest! {
    // Raw round trip: the on-screen hex string converts back to the exact
    // bytes the device sent.
    #[test]
    fn raw_hex_roundtrip(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = bytes_to_hex(&data);
        prop_assert_eq!(parse_hex(&encoded).unwrap(), data);
    }
}
