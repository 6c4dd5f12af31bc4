#[path = "../common/mod.rs"]
mod common;

use msr206::protocol::{ResponseOutcome, StatusCode};
use msr206::test_support::{SharedMock, initialized_mock_device};
use msr206::{Coercivity, TrackSet};

#[test]
fn read_tracks_full_exchange() {
    let mock = SharedMock::new();
    let mut dev = initialized_mock_device(&mock).unwrap();
    mock.push_response(common::fixtures::track_response());

    match dev.read_tracks().unwrap() {
        ResponseOutcome::TrackData(t) => {
            assert_eq!(t.track1, "%B4111111111111111^CARDHOLDER/NAME^2512101");
            assert_eq!(t.track2, ";4111111111111111=2512101");
            assert_eq!(t.track3, "");
        }
        other => panic!("expected TrackData, got {:?}", other),
    }
    assert_eq!(mock.last_sent(), Some(vec![0x1B, b'r']));
}

#[test]
fn write_tracks_sends_framed_payload() {
    let mock = SharedMock::new();
    let mut dev = initialized_mock_device(&mock).unwrap();
    mock.push_response(common::fixtures::success_frame());

    let tracks = TrackSet::new("A", "B", "C");
    assert_eq!(dev.write_tracks(&tracks).unwrap(), ResponseOutcome::Success);
    assert_eq!(
        mock.last_sent(),
        Some(vec![
            0x1B, 0x77, 0x1B, 0x73, 0x1B, 0x01, 0x41, 0x1B, 0x02, 0x42, 0x1B, 0x03, 0x43,
            0x3F, 0x1C
        ])
    );
}

#[test]
fn write_tracks_surfaces_device_error() {
    let mock = SharedMock::new();
    let mut dev = initialized_mock_device(&mock).unwrap();
    mock.push_response(common::fixtures::status_frame(b'9'));

    assert_eq!(
        dev.write_tracks(&TrackSet::new("A", "", "")).unwrap(),
        ResponseOutcome::DeviceError(StatusCode::InvalidSwipeInWriteMode)
    );
}

#[test]
fn read_raw_returns_hex() {
    let mock = SharedMock::new();
    let mut dev = initialized_mock_device(&mock).unwrap();
    mock.push_response(vec![0xDE, 0xAD, 0xBE, 0xEF]);

    assert_eq!(
        dev.read_raw().unwrap(),
        ResponseOutcome::RawData("deadbeef".to_string())
    );
    assert_eq!(mock.last_sent(), Some(vec![0x1B, b'm']));
}

#[test]
fn write_raw_roundtrips_through_the_wire_format() {
    let mock = SharedMock::new();
    let mut dev = initialized_mock_device(&mock).unwrap();

    // First read raw data off a card...
    mock.push_response(vec![0x10, 0x20, 0xFF]);
    let hex_payload = match dev.read_raw().unwrap() {
        ResponseOutcome::RawData(s) => s,
        other => panic!("expected RawData, got {:?}", other),
    };

    // ...then write the same payload back.
    mock.push_response(common::fixtures::success_frame());
    assert_eq!(
        dev.write_raw(&hex_payload).unwrap(),
        ResponseOutcome::Success
    );

    let mut expected = vec![0x1B, 0x6E];
    expected.extend_from_slice(b"1020ff");
    expected.push(0x1C);
    assert_eq!(mock.last_sent(), Some(expected));
}

#[test]
fn coercivity_commands_classify_status() {
    let mock = SharedMock::new();
    let mut dev = initialized_mock_device(&mock).unwrap();

    mock.push_response(common::fixtures::success_frame());
    assert_eq!(
        dev.set_coercivity(Coercivity::Low).unwrap(),
        ResponseOutcome::Success
    );
    assert_eq!(mock.last_sent(), Some(vec![0x1B, b'y']));

    mock.push_response(common::fixtures::status_frame(b'4'));
    assert_eq!(
        dev.set_coercivity(Coercivity::High).unwrap(),
        ResponseOutcome::DeviceError(StatusCode::InvalidCommand)
    );
    assert_eq!(mock.last_sent(), Some(vec![0x1B, b'x']));
}

#[test]
fn reset_with_no_reply_is_no_response() {
    let mock = SharedMock::new();
    let mut dev = initialized_mock_device(&mock).unwrap();
    assert_eq!(dev.reset().unwrap(), ResponseOutcome::NoResponse);
    assert_eq!(mock.last_sent(), Some(vec![0x1B, b'a']));
}

#[test]
fn garbled_swipe_becomes_decode_failure() {
    let mock = SharedMock::new();
    let mut dev = initialized_mock_device(&mock).unwrap();
    mock.push_response(vec![0x1B, 0xC3, 0x28]);

    match dev.read_tracks().unwrap() {
        ResponseOutcome::DecodeFailure(bytes) => assert_eq!(bytes, vec![0x1B, 0xC3, 0x28]),
        other => panic!("expected DecodeFailure, got {:?}", other),
    }
}
