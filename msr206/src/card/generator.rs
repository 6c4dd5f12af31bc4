// msr206/src/card/generator.rs

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::luhn;
use crate::card::profile::CardBrand;
use crate::card::tracks::{self, Track1Layout, TrackFields};
use crate::types::TrackSet;

/// A synthesized test card: Luhn-valid number plus rendered tracks.
///
/// Immutable once produced; the caller owns display and transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedCard {
    /// The primary account number (always Luhn-valid)
    pub number: String,
    /// Rendered Track 1
    pub track1: String,
    /// Rendered Track 2
    pub track2: String,
}

impl GeneratedCard {
    /// The tracks as a write-ready [`TrackSet`] (track 3 left empty).
    pub fn to_track_set(&self) -> TrackSet {
        TrackSet::new(self.track1.clone(), self.track2.clone(), "")
    }
}

/// Configurable generator for synthetic, Luhn-valid card data.
#[derive(Debug, Clone, Default)]
pub struct CardGenerator {
    fields: TrackFields,
    layout: Track1Layout,
}

impl CardGenerator {
    /// Generator with placeholder cardholder fields and the standard
    /// Track 1 layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cardholder fields embedded in the rendered tracks.
    pub fn with_fields(mut self, fields: TrackFields) -> Self {
        self.fields = fields;
        self
    }

    /// Select the Track 1 layout.
    pub fn with_layout(mut self, layout: Track1Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Generate a card for the brand using the thread-local RNG.
    pub fn generate(&self, brand: CardBrand) -> GeneratedCard {
        self.generate_with_rng(brand, &mut rand::thread_rng())
    }

    /// Generate a card for the brand from the given randomness source.
    ///
    /// Pick one of the brand's prefixes uniformly, pad with uniform random
    /// digits to `length - 1`, then append the Luhn check digit. The result
    /// always verifies; there is no failure mode once the brand is known.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        brand: CardBrand,
        rng: &mut R,
    ) -> GeneratedCard {
        let profile = brand.profile();

        // Profiles are non-empty static tables; choose cannot return None.
        let prefix = profile
            .prefixes
            .choose(rng)
            .copied()
            .unwrap_or(profile.prefixes[0]);

        let mut digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
        while digits.len() < profile.length - 1 {
            digits.push(rng.gen_range(0..10));
        }
        digits.push(luhn::check_digit_of(&digits));

        let number: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
        debug_assert!(luhn::verify(&number));

        GeneratedCard {
            track1: tracks::render_track1(&number, &self.fields, self.layout),
            track2: tracks::render_track2(&number, &self.fields),
            number,
        }
    }
}
