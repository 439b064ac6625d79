//! Async request commands.
//!
//! Each command performs one gateway call and reports its outcome as an
//! [`AppMsg`], so page state is only ever mutated inside `update`.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use crate::api::gateway::ReviewGateway;
use crate::api::locator::{CourseId, ReviewQuery};
use crate::api::models::NewReview;
use crate::tui::messages::AppMsg;

/// Fetches one page of reviews and reports it with its latency.
pub(super) fn fetch_reviews_cmd(gateway: Arc<dyn ReviewGateway>, query: ReviewQuery) -> Cmd {
    Box::pin(async move {
        let started = Instant::now();
        let result = gateway.list_reviews(&query).await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        Some(Box::new(AppMsg::ReviewsLoaded {
            query,
            result,
            latency_ms,
        }) as Box<dyn Any + Send>)
    })
}

/// Fetches the course header.
pub(super) fn course_summary_cmd(gateway: Arc<dyn ReviewGateway>, course_id: CourseId) -> Cmd {
    Box::pin(async move {
        let result = gateway.course_summary(course_id).await;
        Some(Box::new(AppMsg::CourseLoaded(result)) as Box<dyn Any + Send>)
    })
}

/// Sends a new review.
pub(super) fn create_review_cmd(
    gateway: Arc<dyn ReviewGateway>,
    course_id: CourseId,
    review: NewReview,
) -> Cmd {
    Box::pin(async move {
        let result = gateway.create_review(course_id, &review).await;
        Some(Box::new(AppMsg::ReviewSubmitted(result)) as Box<dyn Any + Send>)
    })
}
