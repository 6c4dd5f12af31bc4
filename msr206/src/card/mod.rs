// msr206/src/card/mod.rs

//! Synthetic test card data: brand profiles, Luhn arithmetic, track
//! rendering, and the generator that ties them together.

pub mod generator;
pub mod luhn;
pub mod profile;
pub mod tracks;

pub use generator::{CardGenerator, GeneratedCard};
pub use profile::{CardBrand, CardProfile};
pub use tracks::{Track1Layout, TrackFields};
