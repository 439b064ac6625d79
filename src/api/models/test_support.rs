//! Test helpers for constructing review fixtures.
//!
//! # Examples
//!
//! ```
//! use coursescope::api::models::test_support::{rated_review, review_with_id};
//!
//! let review = rated_review(1, 5, "great");
//! assert_eq!(review.rating, Some(5));
//!
//! let plain = review_with_id(42);
//! assert_eq!(plain.content.as_deref(), Some("Review 42"));
//! ```

use super::{MAX_RATING, RatingBreakdown, RatingBucket, Review, ReviewAuthor, ReviewPage};
use crate::api::pagination::PageInfo;

/// Constructs a review with a rating, text and a named author.
#[must_use]
pub fn rated_review(id: u64, rating: u8, content: &str) -> Review {
    Review {
        id,
        rating: Some(rating),
        content: Some(content.to_owned()),
        created_at: Some("2025-01-01T00:00:00".to_owned()),
        user: Some(ReviewAuthor {
            username: Some("alice".to_owned()),
            avatar_url: None,
        }),
    }
}

/// Constructs an unrated review whose text is `Review {id}`.
#[must_use]
pub fn review_with_id(id: u64) -> Review {
    Review {
        id,
        content: Some(format!("Review {id}")),
        ..Review::default()
    }
}

/// Builds a review page for `page_number` holding `reviews`.
#[must_use]
pub fn review_page(page_number: u32, reviews: Vec<Review>, has_next: bool) -> ReviewPage {
    let buckets = (1..=MAX_RATING)
        .rev()
        .map(|rating| RatingBucket {
            rating,
            count: u64::try_from(
                reviews
                    .iter()
                    .filter(|review| review.rating == Some(rating))
                    .count(),
            )
            .unwrap_or(u64::MAX),
        })
        .filter(|bucket| bucket.count > 0)
        .collect();

    ReviewPage {
        reviews,
        breakdown: RatingBreakdown::new(buckets),
        statistics: None,
        page_info: PageInfo::new(page_number)
            .with_has_next(has_next)
            .with_has_prev(page_number > 1),
    }
}
