//! Customer reviews and review submission validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ProductId, ReviewId};
use super::rating::{Rating, RatingError};

/// Errors raised when validating a review submission.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// Reviewer name is empty after trimming.
    #[error("name cannot be empty")]
    EmptyName,
    /// Reviewer name exceeds the maximum length.
    #[error("name must be at most {max} characters")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Review text is empty after trimming.
    #[error("comment cannot be empty")]
    EmptyComment,
    /// Review text exceeds the maximum length.
    #[error("comment must be at most {max} characters")]
    CommentTooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Rating is outside 1-5.
    #[error(transparent)]
    Rating(#[from] RatingError),
}

/// A stored review. Reviews are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ReviewId,
    pub product_id: ProductId,
    pub name: String,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// A validated review submission, not yet assigned an ID or timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    name: String,
    rating: Rating,
    comment: String,
}

impl NewReview {
    /// Maximum reviewer name length, in characters.
    pub const MAX_NAME_LENGTH: usize = 100;
    /// Maximum comment length, in characters.
    pub const MAX_COMMENT_LENGTH: usize = 2000;

    /// Validate raw form input.
    ///
    /// Name and comment are trimmed before checking.
    ///
    /// # Errors
    ///
    /// Returns a [`ReviewError`] if the name or comment is empty or too long,
    /// or if the rating is outside 1-5.
    pub fn parse(name: &str, rating: i64, comment: &str) -> Result<Self, ReviewError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ReviewError::EmptyName);
        }
        if name.chars().count() > Self::MAX_NAME_LENGTH {
            return Err(ReviewError::NameTooLong {
                max: Self::MAX_NAME_LENGTH,
            });
        }

        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::EmptyComment);
        }
        if comment.chars().count() > Self::MAX_COMMENT_LENGTH {
            return Err(ReviewError::CommentTooLong {
                max: Self::MAX_COMMENT_LENGTH,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            rating: Rating::new(rating)?,
            comment: comment.to_owned(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Turn the submission into a stored review for `product_id`.
    #[must_use]
    pub fn into_review(self, id: ReviewId, product_id: ProductId, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            product_id,
            name: self.name,
            rating: self.rating,
            comment: self.comment,
            created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_fields() {
        let review = NewReview::parse("  Jane Doe ", 4, "\tLovely amber dry-down\n").unwrap();
        assert_eq!(review.name(), "Jane Doe");
        assert_eq!(review.comment(), "Lovely amber dry-down");
        assert_eq!(review.rating().stars(), 4);
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        assert_eq!(NewReview::parse("   ", 5, "ok"), Err(ReviewError::EmptyName));
    }

    #[test]
    fn test_parse_rejects_blank_comment() {
        assert_eq!(NewReview::parse("Jane", 5, ""), Err(ReviewError::EmptyComment));
    }

    #[test]
    fn test_parse_rejects_long_fields() {
        let long_name = "n".repeat(NewReview::MAX_NAME_LENGTH + 1);
        assert!(matches!(
            NewReview::parse(&long_name, 5, "ok"),
            Err(ReviewError::NameTooLong { .. })
        ));

        let long_comment = "c".repeat(NewReview::MAX_COMMENT_LENGTH + 1);
        assert!(matches!(
            NewReview::parse("Jane", 5, &long_comment),
            Err(ReviewError::CommentTooLong { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_rating() {
        assert!(matches!(
            NewReview::parse("Jane", 0, "meh"),
            Err(ReviewError::Rating(_))
        ));
    }

    #[test]
    fn test_into_review_serializes_with_product_reference() {
        let review = NewReview::parse("Jane", 3, "Fine")
            .unwrap()
            .into_review(
                ReviewId::new("r1"),
                ProductId::new("2"),
                "2025-04-01T12:00:00Z".parse().unwrap(),
            );
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["_id"], "r1");
        assert_eq!(json["productId"], "2");
        assert_eq!(json["rating"], 3);
    }
}
