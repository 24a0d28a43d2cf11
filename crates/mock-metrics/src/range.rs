//! Half-open sampling ranges.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A half-open `[min, max)` range that values are sampled from.
///
/// Ranges are not validated: a degenerate or inverted range always yields
/// `min`. Every range used by the crate is a hardcoded constant.
///
/// # Example
///
/// ```
/// use mock_metrics::ValueRange;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let range = ValueRange::new(10.0, 20.0);
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let value = range.sample(&mut rng);
///
/// assert!(range.contains(value));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl ValueRange {
    /// Creates a range from its bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draws a uniformly distributed value from the range.
    ///
    /// The result is always strictly below `max`, even when the random
    /// source returns its largest possible draw.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min < self.max {
            // Float rounding in the scaled draw can land exactly on `max`.
            rng.random_range(self.min..self.max).min(self.max.next_down())
        } else {
            self.min
        }
    }

    /// Returns a range scaled by the given factors around a centre value.
    ///
    /// Used to keep a metric's trend series near its headline value.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "trend bounds are proportional to the headline value"
    )]
    pub const fn around(centre: f64, low_factor: f64, high_factor: f64) -> Self {
        Self::new(centre * low_factor, centre * high_factor)
    }

    /// Returns `true` when `value` lies in `[min, max)`.
    #[must_use]
    pub const fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}
