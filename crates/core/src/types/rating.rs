//! Review star rating.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value lies outside the 1-5 star range.
    #[error("rating must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Smallest accepted rating.
        min: u8,
        /// Largest accepted rating.
        max: u8,
    },
}

/// A star rating between 1 and 5 inclusive.
///
/// ## Examples
///
/// ```
/// use essence_luxe_core::Rating;
///
/// assert!(Rating::new(5).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;
    /// Highest rating, also the review form default.
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1-5.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if `value` is not in `1..=5`.
    pub fn new(value: i64) -> Result<Self, RatingError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(RatingError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// Returns the number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_range() {
        for value in 1..=5 {
            assert_eq!(i64::from(Rating::new(value).unwrap().stars()), value);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            Rating::new(0),
            Err(RatingError::OutOfRange { value: 0, .. })
        ));
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(-1).is_err());
        assert!(Rating::new(261).is_err());
    }

    #[test]
    fn test_default_is_five_stars() {
        assert_eq!(Rating::default().stars(), 5);
    }

    #[test]
    fn test_deserialize_validates() {
        let rating: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(rating.stars(), 4);
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
    }
}
