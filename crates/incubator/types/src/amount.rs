//! Currency amounts
//!
//! Whole currency units. Funding figures are never fractional in the
//! incubator, so an integer newtype avoids float drift in sums.

use serde::{Deserialize, Serialize};

/// Financial amount (whole currency units)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Amount(pub u64);

impl Amount {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Compact thousands form used in reports, e.g. `$175K`
    pub fn thousands(&self) -> String {
        format_thousands(self.0 as i128)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl std::ops::Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Amount::saturating_add)
    }
}

/// Render a signed value as `$<n>K`, rounding half away from zero.
pub fn format_thousands(value: i128) -> String {
    let thousands = (value as f64 / 1000.0).round() as i128;
    if thousands < 0 {
        format!("-${}K", -thousands)
    } else {
        format!("${}K", thousands)
    }
}

/// Difference `a - b` as a signed value, saturating at the `i64` bounds.
pub fn signed_difference(a: u64, b: u64) -> i64 {
    let diff = a as i128 - b as i128;
    diff.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
