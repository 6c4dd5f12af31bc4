//! Read a card from an attached MSR206 and print the decoded tracks.
//!
//! Run with
//! `MSR206_PORT=/dev/ttyUSB0 cargo run --features serial --example read_card`
//! and swipe a card when prompted.

use msr206::device::{Device, DrainPolicy, ExchangeConfig};
use msr206::protocol::ResponseOutcome;
use msr206::transport::SerialTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let port = std::env::var("MSR206_PORT").unwrap_or_else(|_| "/dev/ttyUSB0".to_string());
    let transport = SerialTransport::open_default(&port)?;

    // The response only starts once the user swipes, so each read polls
    // through its whole window instead of stopping at the first empty read.
    let config = ExchangeConfig {
        drain_policy: DrainPolicy::WaitFullWindow,
        ..ExchangeConfig::default()
    };
    let mut dev = Device::new_with_transport(Box::new(transport))
        .with_config(config)
        .initialize()?;

    println!("please swipe your card...");
    loop {
        match dev.read_tracks()? {
            ResponseOutcome::TrackData(tracks) => {
                println!("track1: {}", tracks.track1);
                println!("track2: {}", tracks.track2);
                println!("track3: {}", tracks.track3);
                break;
            }
            ResponseOutcome::DecodeFailure(bytes) => {
                println!("undecodable swipe: {}", msr206::utils::bytes_to_hex(&bytes));
                break;
            }
            ResponseOutcome::NoResponse => continue,
            other => {
                println!("no track data: {:?}", other);
                break;
            }
        }
    }

    dev.close()?;
    Ok(())
}
