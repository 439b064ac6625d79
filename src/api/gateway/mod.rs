//! Gateways for talking to the course review API.
//!
//! The trait seam lets page logic run against mocks in tests while
//! [`HttpReviewGateway`] performs real HTTP requests with `reqwest`.

mod client;
mod envelope;


pub use client::HttpReviewGateway;

use async_trait::async_trait;

use super::error::ReviewApiError;
use super::locator::{CourseId, ReviewQuery};
use super::models::{CourseSummary, NewReview, ReviewPage, SubmissionReceipt};

/// Gateway for review listing, review creation and course details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch one page of reviews with aggregates.
    async fn list_reviews(&self, query: &ReviewQuery) -> Result<ReviewPage, ReviewApiError>;

    /// Create a review for the course as the session user.
    async fn create_review(
        &self,
        course_id: CourseId,
        review: &NewReview,
    ) -> Result<SubmissionReceipt, ReviewApiError>;

    /// Fetch the course header information.
    async fn course_summary(&self, course_id: CourseId) -> Result<CourseSummary, ReviewApiError>;
}
