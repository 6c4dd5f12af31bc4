// msr206/src/card/tracks.rs

//! ISO/IEC 7813 track rendering for generated cards.

/// Caller-supplied cardholder fields embedded in the rendered tracks.
///
/// Content is not validated here; the codec rejects reserved protocol bytes
/// at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackFields {
    /// Cardholder name as embossed
    pub name: String,
    /// Expiry in YYMM
    pub expiry: String,
    /// Three-digit service code
    pub service_code: String,
}

impl Default for TrackFields {
    fn default() -> Self {
        // Placeholder fields for synthesized test cards.
        Self {
            name: "CARDHOLDER/NAME".to_string(),
            expiry: "2512".to_string(),
            service_code: "101".to_string(),
        }
    }
}

/// The two Track 1 layouts found in the wild for our test data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Track1Layout {
    /// `%B<number>^<name>^<expiry><service_code>?`
    #[default]
    Standard,
    /// `%B<number>^<name>/<expiry>^<service_code>?`
    NameSlashExpiry,
}

/// Render Track 1 for a card number with the given fields and layout.
pub fn render_track1(number: &str, fields: &TrackFields, layout: Track1Layout) -> String {
    match layout {
        Track1Layout::Standard => format!(
            "%B{}^{}^{}{}?",
            number, fields.name, fields.expiry, fields.service_code
        ),
        Track1Layout::NameSlashExpiry => format!(
            "%B{}^{}/{}^{}?",
            number, fields.name, fields.expiry, fields.service_code
        ),
    }
}

/// Render Track 2: `;<number>=<expiry><service_code>?`
pub fn render_track2(number: &str, fields: &TrackFields) -> String {
    format!(";{}={}{}?", number, fields.expiry, fields.service_code)
}
