//! Seek table: horizontal click position → audio playback offset.
//!
//! The page is split into vertical strips. Each strip maps to a fixed
//! timestamp in the looping track; clicks right of the last strip (or
//! anywhere the fraction is not a usable number) rewind the track to 0.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StageError;

/// One half-open strip `[previous upper, upper)` of the seek table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bucket {
    /// Exclusive upper bound, as a fraction of the document width.
    pub upper: f64,
    /// Playback offset in seconds.
    pub target_secs: f64,
}

impl Bucket {
    pub const fn new(upper: f64, target_secs: f64) -> Self {
        Self { upper, target_secs }
    }
}

/// Strips at 0.1 increments up to 0.9; the last tenth of the page rewinds.
pub const DEFAULT_BUCKETS: [Bucket; 9] = [
    Bucket::new(0.1, 80.0),
    Bucket::new(0.2, 40.0),
    Bucket::new(0.3, 1.0),
    Bucket::new(0.4, 116.0),
    Bucket::new(0.5, 210.0),
    Bucket::new(0.6, 189.0),
    Bucket::new(0.7, 160.0),
    Bucket::new(0.8, 144.0),
    Bucket::new(0.9, 284.0),
];

/// What a click does to the audio track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekAction {
    /// Jump to this offset (seconds) and spawn a splash.
    Seek(f64),
    /// Reset playback to the start. No splash.
    Rewind,
}

impl SeekAction {
    /// Playback time the audio element should be set to.
    pub fn target_secs(self) -> f64 {
        match self {
            SeekAction::Seek(secs) => secs,
            SeekAction::Rewind => 0.0,
        }
    }

    pub fn is_seek(self) -> bool {
        matches!(self, SeekAction::Seek(_))
    }
}

/// Ordered, contiguous list of [`Bucket`]s starting at 0.
///
/// Upper bounds are strictly increasing and lie in `(0, 1]`; construction
/// rejects anything else so lookups never have to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Bucket>", into = "Vec<Bucket>")
)]
pub struct SeekTable {
    buckets: Vec<Bucket>,
}

impl SeekTable {
    pub fn new(buckets: Vec<Bucket>) -> Result<Self, StageError> {
        if buckets.is_empty() {
            return Err(StageError::EmptySeekTable);
        }

        let mut lower = 0.0;
        for (index, bucket) in buckets.iter().enumerate() {
            let upper = bucket.upper;
            if !upper.is_finite() || upper <= lower || upper > 1.0 {
                return Err(StageError::BucketBound { index, upper });
            }
            let target_secs = bucket.target_secs;
            if !target_secs.is_finite() || target_secs < 0.0 {
                return Err(StageError::BucketTarget { index, target_secs });
            }
            lower = upper;
        }

        Ok(Self { buckets })
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Linear match over the strips.
    pub fn lookup(&self, fraction: f64) -> SeekAction {
        if fraction.is_nan() || fraction < 0.0 {
            return SeekAction::Rewind;
        }
        self.buckets
            .iter()
            .find(|b| fraction < b.upper)
            .map_or(SeekAction::Rewind, |b| SeekAction::Seek(b.target_secs))
    }

    /// Lookup for a click at page x-coordinate `x` on a document `width` wide.
    pub fn lookup_click(&self, x: f64, width: f64) -> SeekAction {
        self.lookup(horizontal_fraction(x, width))
    }
}

impl Default for SeekTable {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS.to_vec(),
        }
    }
}

impl TryFrom<Vec<Bucket>> for SeekTable {
    type Error = StageError;

    fn try_from(buckets: Vec<Bucket>) -> Result<Self, Self::Error> {
        Self::new(buckets)
    }
}

impl From<SeekTable> for Vec<Bucket> {
    fn from(table: SeekTable) -> Self {
        table.buckets
    }
}

/// Fraction of the document width at `x`. A zero width yields a non-finite
/// value, which every table treats as [`SeekAction::Rewind`].
#[inline]
pub fn horizontal_fraction(x: f64, width: f64) -> f64 {
    x / width
}
