#[path = "../common/mod.rs"]
mod common;

use msr206::protocol::{ResponseOutcome, StatusCode, classify_status};
use proptest::prelude::*;

#[test]
fn classification_table() {
    // The byte sequences from the device protocol, each mapping to exactly
    // one outcome.
    assert_eq!(classify_status(&[]), ResponseOutcome::NoResponse);
    assert_eq!(
        classify_status(&common::fixtures::success_frame()),
        ResponseOutcome::Success
    );
    assert_eq!(
        classify_status(&common::fixtures::status_frame(b'1')),
        ResponseOutcome::DeviceError(StatusCode::ReadWriteError)
    );
    assert_eq!(classify_status(&[0x1B, b'9']), ResponseOutcome::NoResponse);
    assert_eq!(classify_status(&[0xFF, 0xFF]), ResponseOutcome::NoResponse);
}

#[test]
fn device_error_statuses() {
    for (byte, code) in [
        (b'1', StatusCode::ReadWriteError),
        (b'2', StatusCode::FormatError),
        (b'4', StatusCode::InvalidCommand),
        (b'9', StatusCode::InvalidSwipeInWriteMode),
    ] {
        assert_eq!(
            classify_status(&common::fixtures::status_frame(byte)),
            ResponseOutcome::DeviceError(code)
        );
        assert_eq!(code.as_byte(), byte);
    }
}

#[test]
fn success_frame_checked_before_status_byte() {
    // A success frame also starts with ESC and is longer than two bytes;
    // the trailing `ESC '0'` must win over the generic last-byte rule.
    let frame = [0x1B, b'w', 0x1B, b'0'];
    assert_eq!(classify_status(&frame), ResponseOutcome::Success);
}

#[test]
fn unknown_status_preserved() {
    match classify_status(&common::fixtures::status_frame(b'Z')) {
        ResponseOutcome::UnknownStatus(b'Z') => {}
        other => panic!("expected UnknownStatus, got {:?}", other),
    }
}

#[test]
fn status_messages_are_operator_readable() {
    assert_eq!(StatusCode::ReadWriteError.message(), "write or read error");
    assert_eq!(
        StatusCode::InvalidSwipeInWriteMode.message(),
        "invalid card swipe when in write mode"
    );
}

proptest! {
    // Totality: every byte sequence the transport can hand back lands in
    // exactly one status outcome, without panicking.
    #[test]
    fn classify_is_total(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let outcome = classify_status(&data);
        let count = [
            matches!(outcome, ResponseOutcome::Success),
            matches!(outcome, ResponseOutcome::DeviceError(_)),
            matches!(outcome, ResponseOutcome::UnknownStatus(_)),
            matches!(outcome, ResponseOutcome::NoResponse),
        ]
        .iter()
        .filter(|&&hit| hit)
        .count();
        prop_assert_eq!(count, 1);
    }
}
