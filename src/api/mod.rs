//! Client for the course review REST API.
//!
//! This module builds endpoint URLs, decodes the `{success, message, data}`
//! response envelope and maps failures into [`ReviewApiError`] so page logic
//! can show a server-supplied reason or a generic fallback.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;

pub use error::{GENERIC_FAILURE_MESSAGE, ReviewApiError};
pub use gateway::{HttpReviewGateway, ReviewGateway};
pub use locator::{ApiBase, CourseId, ReviewQuery, SessionCookie, SortKey};
pub use models::{
    CourseSummary, DetailedRatings, NewReview, RatingBreakdown, RatingBucket, Review,
    ReviewAuthor, ReviewPage, ReviewStatistics, SubmissionReceipt,
};
pub use pagination::PageInfo;

#[cfg(test)]
pub use gateway::MockReviewGateway;
