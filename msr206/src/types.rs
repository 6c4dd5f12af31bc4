// msr206/src/types.rs

/// The three logical data tracks of one magnetic stripe card.
///
/// Unused tracks are empty strings, never an error — real card data
/// legitimately omits tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSet {
    /// Track 1 text (IATA format on payment cards)
    pub track1: String,
    /// Track 2 text (ABA format on payment cards)
    pub track2: String,
    /// Track 3 text (THRIFT format, rarely used)
    pub track3: String,
}

impl TrackSet {
    /// Build a TrackSet from the three track strings.
    pub fn new(
        track1: impl Into<String>,
        track2: impl Into<String>,
        track3: impl Into<String>,
    ) -> Self {
        Self {
            track1: track1.into(),
            track2: track2.into(),
            track3: track3.into(),
        }
    }

    /// True when every track is empty.
    pub fn is_empty(&self) -> bool {
        self.track1.is_empty() && self.track2.is_empty() && self.track3.is_empty()
    }
}

/// Write strength the device applies to the stripe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coercivity {
    /// LO-CO: low coercivity media
    Low,
    /// HI-CO: high coercivity media
    High,
}

impl Coercivity {
    /// Front-panel label for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LO-CO",
            Self::High => "HI-CO",
        }
    }
}
