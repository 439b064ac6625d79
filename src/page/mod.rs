//! Course review page state and orchestration.
//!
//! [`CoursePage`] owns the gallery, the review list controller and the
//! review form for one course. Its async operations take the gateway as an
//! argument; the terminal UI instead calls the `begin_*`/`finish_*` halves
//! around its own command futures.

pub mod error;
pub mod form;
pub mod gallery;
pub mod rating;
pub mod reviews;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::{Duration, Instant};

pub use error::SubmissionError;
pub use form::{FormFocus, ReviewForm};
pub use gallery::Gallery;
pub use rating::{RatingAxis, RatingCapture, RatingInput, StarRow, StarTone};
pub use reviews::{ListView, LoadOutcome, ReviewListController};

use crate::api::error::ReviewApiError;
use crate::api::gateway::ReviewGateway;
use crate::api::locator::{CourseId, ReviewQuery, SortKey};
use crate::api::models::{CourseSummary, NewReview, ReviewPage, SubmissionReceipt};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// Notification shown after a review is accepted without a server message.
pub const SUBMITTED_MESSAGE: &str = "Review submitted successfully!";

/// Kind of transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Something succeeded.
    Success,
    /// Something failed but the page stays usable.
    Error,
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Notification kind.
    pub kind: NoticeKind,
    /// Text to show.
    pub message: String,
}

/// Values the page is created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    /// Course to show.
    pub course_id: CourseId,
    /// Initial sort key.
    pub sort: SortKey,
    /// Prefix for bare image filenames.
    pub asset_base: String,
    /// Whether sub-ratings are captured and sent.
    pub detailed_ratings: bool,
}

/// All client state for one course's review page.
pub struct CoursePage {
    course_id: CourseId,
    asset_base: String,
    gallery: Gallery,
    reviews: ReviewListController,
    form: ReviewForm,
    summary: Option<CourseSummary>,
    notice: Option<Notice>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for CoursePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoursePage")
            .field("course_id", &self.course_id)
            .field("gallery", &self.gallery)
            .field("reviews", &self.reviews)
            .field("form", &self.form)
            .field("summary", &self.summary)
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

impl CoursePage {
    /// Creates the page with placeholder images and an idle review list.
    #[must_use]
    pub fn new(settings: &PageSettings, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self {
            course_id: settings.course_id,
            asset_base: settings.asset_base.clone(),
            gallery: Gallery::initialize(None, &settings.asset_base),
            reviews: ReviewListController::new(settings.course_id, settings.sort.clone()),
            form: ReviewForm::new(settings.detailed_ratings),
            summary: None,
            notice: None,
            telemetry,
        }
    }

    /// Course shown on the page.
    #[must_use]
    pub const fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Image gallery.
    #[must_use]
    pub const fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Mutable image gallery.
    pub const fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    /// Review list state.
    #[must_use]
    pub const fn reviews(&self) -> &ReviewListController {
        &self.reviews
    }

    /// Mutable review list state.
    pub const fn reviews_mut(&mut self) -> &mut ReviewListController {
        &mut self.reviews
    }

    /// Review form.
    #[must_use]
    pub const fn form(&self) -> &ReviewForm {
        &self.form
    }

    /// Mutable review form.
    pub const fn form_mut(&mut self) -> &mut ReviewForm {
        &mut self.form
    }

    /// Course header, once loaded.
    #[must_use]
    pub const fn summary(&self) -> Option<&CourseSummary> {
        self.summary.as_ref()
    }

    /// Notification currently shown.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Dismisses the current notification.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Applies a course summary response.
    ///
    /// The first successful summary seeds the gallery; later ones only
    /// refresh the header so the viewer keeps their gallery position.
    pub fn apply_summary(&mut self, result: Result<CourseSummary, ReviewApiError>) {
        match result {
            Ok(summary) => {
                if self.summary.is_none() {
                    self.gallery =
                        Gallery::initialize(Some(&summary.cover_images), &self.asset_base);
                }
                self.summary = Some(summary);
            }
            Err(error) => {
                tracing::warn!(course_id = %self.course_id, %error, "loading course failed");
            }
        }
    }

    /// Applies a review page outcome and records telemetry.
    ///
    /// A failed later page surfaces as an error notification because the
    /// list itself keeps its content.
    pub fn finish_reviews(
        &mut self,
        query: &ReviewQuery,
        result: Result<ReviewPage, ReviewApiError>,
        latency: Duration,
    ) -> LoadOutcome {
        let review_count = result.as_ref().map_or(0, |page| page.reviews.len());
        let succeeded = result.is_ok();
        let outcome = self.reviews.complete_load(query, result);

        if succeeded {
            self.telemetry.record(TelemetryEvent::ReviewPageLoaded {
                page: query.page,
                review_count,
                latency_ms: u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
            });
        } else {
            self.telemetry
                .record(TelemetryEvent::ReviewLoadFailed { page: query.page });
        }

        if let LoadOutcome::Failed { page, message } = &outcome
            && *page > 1
        {
            self.notice = Some(Notice {
                kind: NoticeKind::Error,
                message: message.clone(),
            });
        }
        outcome
    }

    /// Validates the form and returns the request to send.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::MissingRating`] when no overall rating is
    /// selected and [`SubmissionError::InFlight`] while a submission is
    /// outstanding.
    pub fn begin_submission(&mut self) -> Result<(CourseId, NewReview), SubmissionError> {
        let course_id = self.course_id;
        self.form.prepare().map(|review| (course_id, review))
    }

    /// Applies the server's answer to a submission.
    ///
    /// On success the form closes, a notification is shown and the review
    /// list restarts from page 1; the returned query (if any) must be
    /// fetched, followed by a course summary refresh.
    pub fn finish_submission(
        &mut self,
        result: &Result<SubmissionReceipt, ReviewApiError>,
    ) -> Option<ReviewQuery> {
        self.form.complete(result);
        match result {
            Ok(receipt) => {
                self.telemetry.record(TelemetryEvent::ReviewSubmitted {
                    course_id: self.course_id.get(),
                });
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    message: receipt
                        .message
                        .clone()
                        .filter(|message| !message.trim().is_empty())
                        .unwrap_or_else(|| SUBMITTED_MESSAGE.to_owned()),
                });
                self.reviews.restart()
            }
            Err(error) => {
                tracing::warn!(course_id = %self.course_id, %error, "review submission failed");
                None
            }
        }
    }

    /// Fetches the course header.
    pub async fn load_course(&mut self, gateway: &dyn ReviewGateway) {
        let result = gateway.course_summary(self.course_id).await;
        self.apply_summary(result);
    }

    /// Loads the current page of reviews unless a load is in flight.
    ///
    /// Returns `None` when the request was dropped.
    pub async fn load_reviews(&mut self, gateway: &dyn ReviewGateway) -> Option<LoadOutcome> {
        let query = self.reviews.begin_load()?;
        Some(self.fetch_reviews(gateway, &query).await)
    }

    /// Changes the sort order and reloads from page 1.
    pub async fn change_sort(
        &mut self,
        gateway: &dyn ReviewGateway,
        sort: SortKey,
    ) -> Option<LoadOutcome> {
        let query = self.reviews.change_sort(sort)?;
        Some(self.fetch_reviews(gateway, &query).await)
    }

    /// Loads and appends the next page.
    pub async fn load_more(&mut self, gateway: &dyn ReviewGateway) -> Option<LoadOutcome> {
        let query = self.reviews.load_more()?;
        Some(self.fetch_reviews(gateway, &query).await)
    }

    /// Submits the form, then reloads reviews and the course header.
    ///
    /// # Errors
    ///
    /// Returns local validation failures without touching the network and
    /// [`SubmissionError::Api`] when the server rejects the review.
    pub async fn submit_review(
        &mut self,
        gateway: &dyn ReviewGateway,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let (course_id, review) = self.begin_submission()?;
        let result = gateway.create_review(course_id, &review).await;
        if let Some(query) = self.finish_submission(&result) {
            self.fetch_reviews(gateway, &query).await;
        }
        if result.is_ok() {
            self.load_course(gateway).await;
        }
        result.map_err(SubmissionError::from)
    }

    async fn fetch_reviews(
        &mut self,
        gateway: &dyn ReviewGateway,
        query: &ReviewQuery,
    ) -> LoadOutcome {
        let started = Instant::now();
        let result = gateway.list_reviews(query).await;
        self.finish_reviews(query, result, started.elapsed())
    }
}
