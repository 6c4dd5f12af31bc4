//! Generate one synthetic test card per supported brand and print the
//! number and rendered tracks.
//!
//! Run with `cargo run --example generate_card`.

use msr206::card::{CardBrand, CardGenerator};

fn main() {
    env_logger::init();

    let generator = CardGenerator::new();
    for brand in CardBrand::ALL {
        let card = generator.generate(brand);
        println!("{:?}", brand);
        println!("  number: {}", card.number);
        println!("  track1: {}", card.track1);
        println!("  track2: {}", card.track2);
    }
}
