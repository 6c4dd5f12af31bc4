// msr206/src/card/profile.rs

use std::str::FromStr;

use crate::{Error, Result};

/// Card brands the generator knows how to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBrand {
    /// Visa: prefix 4, 16 digits
    Visa,
    /// MasterCard: prefixes 51-55, 16 digits
    MasterCard,
    /// American Express: prefixes 34/37, 15 digits
    AmericanExpress,
    /// Discover: 6011 and 622126-622925 ranges, 16 digits
    Discover,
}

impl CardBrand {
    /// All supported brands, for iteration in tests and UIs.
    pub const ALL: [CardBrand; 4] = [
        Self::Visa,
        Self::MasterCard,
        Self::AmericanExpress,
        Self::Discover,
    ];

    /// The static issuing profile for this brand.
    pub fn profile(self) -> &'static CardProfile {
        match self {
            Self::Visa => &VISA,
            Self::MasterCard => &MASTERCARD,
            Self::AmericanExpress => &AMERICAN_EXPRESS,
            Self::Discover => &DISCOVER,
        }
    }
}

impl FromStr for CardBrand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Accept the spellings the card industry (and our callers) use,
        // case-insensitively, with or without separators.
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" => Ok(Self::MasterCard),
            "americanexpress" | "amex" => Ok(Self::AmericanExpress),
            "discover" => Ok(Self::Discover),
            _ => Err(Error::UnsupportedBrand(s.to_string())),
        }
    }
}

/// Per-brand issuing rules: the valid prefixes and the total number of
/// digits including the check digit. Static, read-only reference data
/// shared by generation and validation.
#[derive(Debug)]
pub struct CardProfile {
    /// Issuer identification prefixes valid for the brand
    pub prefixes: &'static [&'static str],
    /// Total primary-account-number length, check digit included
    pub length: usize,
}

static VISA: CardProfile = CardProfile {
    prefixes: &["4"],
    length: 16,
};

static MASTERCARD: CardProfile = CardProfile {
    prefixes: &["51", "52", "53", "54", "55"],
    length: 16,
};

static AMERICAN_EXPRESS: CardProfile = CardProfile {
    prefixes: &["34", "37"],
    length: 15,
};

static DISCOVER: CardProfile = CardProfile {
    prefixes: &[
        "6011", "622126", "622127", "622128", "622129", "62213", "62214", "62215",
        "62216", "62217", "62218", "62219", "6222", "6223", "6224", "6225", "6226",
        "6227", "6228", "62290", "62291", "622920", "622921", "622922", "622923",
        "622924", "622925",
    ],
    length: 16,
};
