use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Error returned when a domain bound is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidDomainBound {
    #[display("domain bound must be a positive 32-bit integer, got {value}")]
    OutOfRange { value: i64 },
    #[display("invalid domain bound '{input}'")]
    Unparsable { input: String },
}

/// Exclusive upper bound of the value range `[0, bound)` samples are drawn from.
///
/// The same bound is shared by sample generation, the missing-value analysis
/// and the random key draws of the search analysis.
///
/// # Examples
///
/// ```
/// use binalyzer_stats::domain::DomainBound;
///
/// assert_eq!(DomainBound::default().get(), 1000);
///
/// let bound = DomainBound::new(10).unwrap();
/// assert!(bound.contains(9));
/// assert!(!bound.contains(10));
/// assert!(!bound.contains(-1));
///
/// assert!(DomainBound::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct DomainBound(i32);

impl DomainBound {
    /// The range used when nothing else is configured: `[0, 1000)`.
    pub const DEFAULT: Self = Self(1000);

    pub fn new(bound: i32) -> Result<Self, InvalidDomainBound> {
        if bound > 0 {
            Ok(Self(bound))
        } else {
            Err(InvalidDomainBound::OutOfRange {
                value: i64::from(bound),
            })
        }
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns `true` if `value` lies in `[0, bound)`.
    #[must_use]
    pub const fn contains(self, value: i32) -> bool {
        0 <= value && value < self.0
    }

    /// Iterates over every value of the domain in ascending order.
    pub fn values(self) -> impl Iterator<Item = i32> {
        0..self.0
    }
}

impl Default for DomainBound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DomainBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i32> for DomainBound {
    type Error = InvalidDomainBound;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DomainBound> for i32 {
    fn from(bound: DomainBound) -> Self {
        bound.0
    }
}

impl FromStr for DomainBound {
    type Err = InvalidDomainBound;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| InvalidDomainBound::Unparsable {
                input: s.to_owned(),
            })?;
        i32::try_from(value)
            .map_err(|_| InvalidDomainBound::OutOfRange { value })
            .and_then(Self::new)
    }
}
