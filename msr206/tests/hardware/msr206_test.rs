#![cfg(feature = "serial")]

use msr206::Coercivity;
use msr206::protocol::ResponseOutcome;
use serial_test::serial;

use super::common;

#[test]
#[serial]
fn reset_completes() -> anyhow::Result<()> {
    let Some(mut dev) = common::open_and_initialize_device()? else {
        return Ok(());
    };
    // The device acknowledges reset loosely; any classified outcome is fine,
    // what matters is that the exchange completes without a transport error.
    let _ = dev.reset()?;
    Ok(())
}

#[test]
#[serial]
fn coercivity_switch_acknowledged() -> anyhow::Result<()> {
    let Some(mut dev) = common::open_and_initialize_device()? else {
        return Ok(());
    };
    let outcome = dev.set_coercivity(Coercivity::High)?;
    assert!(matches!(
        outcome,
        ResponseOutcome::Success | ResponseOutcome::NoResponse
    ));
    Ok(())
}

#[test]
#[serial]
#[ignore = "requires a card swipe at the reader"]
fn read_swiped_card() -> anyhow::Result<()> {
    let Some(mut dev) = common::open_and_initialize_device()? else {
        return Ok(());
    };
    match dev.read_tracks()? {
        ResponseOutcome::TrackData(tracks) => {
            println!("track1: {}", tracks.track1);
            println!("track2: {}", tracks.track2);
            println!("track3: {}", tracks.track3);
        }
        other => println!("outcome: {:?}", other),
    }
    Ok(())
}
