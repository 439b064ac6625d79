//! CLI operation mode handlers.
//!
//! - [`summary`]: print the course header and first page of reviews
//! - [`course_tui`]: interactive course review page
//!
//! Output formatting utilities are in [`output`].

use coursescope::{CoursescopeConfig, HttpReviewGateway, ReviewApiError};

pub mod course_tui;
pub mod output;
pub mod summary;

/// Builds the HTTP gateway from the configured base URL and session.
///
/// # Errors
///
/// Returns [`ReviewApiError::InvalidUrl`] for an unusable base URL and
/// [`ReviewApiError::Configuration`] for a blank session cookie or a client
/// that cannot be constructed.
pub fn build_gateway(config: &CoursescopeConfig) -> Result<HttpReviewGateway, ReviewApiError> {
    let api_base = config.api_base()?;
    let session = config.resolve_session_cookie()?;
    HttpReviewGateway::new(api_base, session.as_ref())
}
