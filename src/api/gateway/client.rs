//! `reqwest`-backed review gateway.

use async_trait::async_trait;
use http::StatusCode;
use http::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue};
use reqwest::{Client, Response};

use super::ReviewGateway;
use super::envelope::{decode_data, decode_envelope};
use crate::api::error::ReviewApiError;
use crate::api::locator::{ApiBase, CourseId, ReviewQuery, SessionCookie};
use crate::api::models::{
    ApiCourse, ApiReviewsData, CourseSummary, NewReview, ReviewPage, SubmissionReceipt,
};

/// HTTP gateway for the course API.
///
/// The session cookie, when present, is attached to every request; the
/// server derives the reviewer's identity from it.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    client: Client,
    api_base: ApiBase,
}

impl HttpReviewGateway {
    /// Builds a gateway for `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::Configuration`] when the cookie is not a
    /// valid header value or the HTTP client cannot be built.
    pub fn new(api_base: ApiBase, session: Option<&SessionCookie>) -> Result<Self, ReviewApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(cookie) = session {
            let mut value = HeaderValue::from_str(cookie.value()).map_err(|error| {
                ReviewApiError::Configuration {
                    message: format!("session cookie is not a valid header: {error}"),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|error| ReviewApiError::Configuration {
                message: format!("build HTTP client failed: {error}"),
            })?;

        Ok(Self { client, api_base })
    }

    /// Returns the API base this gateway targets.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }
}

fn map_transport_error(operation: &str, error: &reqwest::Error) -> ReviewApiError {
    ReviewApiError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

async fn read_body(
    operation: &str,
    response: Response,
) -> Result<(StatusCode, String), ReviewApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| map_transport_error(operation, &error))?;
    Ok((status, body))
}

#[async_trait]
impl ReviewGateway for HttpReviewGateway {
    async fn list_reviews(&self, query: &ReviewQuery) -> Result<ReviewPage, ReviewApiError> {
        const OPERATION: &str = "list reviews";
        let url = self.api_base.review_page_url(query)?;
        tracing::debug!(%url, "fetching review page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;
        let (status, body) = read_body(OPERATION, response).await?;

        let mut envelope = decode_envelope(OPERATION, status, &body)?;
        let data: ApiReviewsData = decode_data(OPERATION, &mut envelope)?;
        Ok(data.into_page(query.page, envelope.pagination))
    }

    async fn create_review(
        &self,
        course_id: CourseId,
        review: &NewReview,
    ) -> Result<SubmissionReceipt, ReviewApiError> {
        const OPERATION: &str = "create review";
        let url = self.api_base.reviews_url(course_id)?;
        tracing::debug!(%url, "submitting review");

        let response = self
            .client
            .post(url)
            .json(review)
            .send()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;
        let (status, body) = read_body(OPERATION, response).await?;

        let envelope = decode_envelope(OPERATION, status, &body)?;
        Ok(SubmissionReceipt {
            message: envelope.message,
        })
    }

    async fn course_summary(&self, course_id: CourseId) -> Result<CourseSummary, ReviewApiError> {
        const OPERATION: &str = "course details";
        let url = self.api_base.course_url(course_id)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;
        let (status, body) = read_body(OPERATION, response).await?;

        let mut envelope = decode_envelope(OPERATION, status, &body)?;
        let course: ApiCourse = decode_data(OPERATION, &mut envelope)?;
        Ok(course.into())
    }
}
