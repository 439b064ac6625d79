//! Tests for course page orchestration against a mocked gateway.

use std::sync::Arc;

use mockall::predicate::{always, eq, function};
use rstest::{fixture, rstest};

use super::{CoursePage, ListView, LoadOutcome, NoticeKind, PageSettings, RatingAxis};
use crate::api::error::ReviewApiError;
use crate::api::gateway::MockReviewGateway;
use crate::api::locator::{CourseId, ReviewQuery, SortKey};
use crate::api::models::test_support::{rated_review, review_page, review_with_id};
use crate::api::models::{CourseSummary, NewReview, SubmissionReceipt};
use crate::page::error::SubmissionError;
use crate::telemetry::{RecordingTelemetrySink, TelemetryEvent, TelemetrySink};

fn course() -> CourseId {
    CourseId::new(42).expect("valid course id")
}

fn settings(detailed_ratings: bool) -> PageSettings {
    PageSettings {
        course_id: course(),
        sort: SortKey::default(),
        asset_base: "/static/images/".to_owned(),
        detailed_ratings,
    }
}

#[fixture]
fn sink() -> Arc<RecordingTelemetrySink> {
    Arc::new(RecordingTelemetrySink::default())
}

fn page_with(sink: &Arc<RecordingTelemetrySink>) -> CoursePage {
    CoursePage::new(&settings(false), Arc::clone(sink) as Arc<dyn TelemetrySink>)
}

fn first_page_query() -> ReviewQuery {
    ReviewQuery {
        course_id: course(),
        page: 1,
        sort: SortKey::default(),
    }
}

fn ids(page: &CoursePage) -> Vec<u64> {
    page.reviews().reviews().iter().map(|review| review.id).collect()
}

#[rstest]
#[tokio::test]
async fn single_review_first_page_renders_card_and_hides_load_more(
    sink: Arc<RecordingTelemetrySink>,
) {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_list_reviews()
        .with(eq(first_page_query()))
        .times(1)
        .returning(|_| Ok(review_page(1, vec![rated_review(1, 5, "great")], false)));
    let mut page = page_with(&sink);

    let outcome = page.load_reviews(&gateway).await;

    assert_eq!(outcome, Some(LoadOutcome::Replaced { count: 1 }));
    let review = page.reviews().reviews().first().expect("one review");
    assert_eq!(review.rating, Some(5));
    assert_eq!(review.text(), Some("great"));
    assert!(!page.reviews().can_load_more());
    assert!(matches!(
        sink.take().as_slice(),
        [TelemetryEvent::ReviewPageLoaded {
            page: 1,
            review_count: 1,
            ..
        }]
    ));
}

#[rstest]
#[tokio::test]
async fn load_while_loading_makes_no_request(sink: Arc<RecordingTelemetrySink>) {
    let mut gateway = MockReviewGateway::new();
    gateway.expect_list_reviews().times(0);
    let mut page = page_with(&sink);
    page.reviews_mut()
        .begin_load()
        .expect("idle controller should load");
    let before = page.reviews().clone();

    let outcome = page.load_reviews(&gateway).await;

    assert_eq!(outcome, None);
    assert_eq!(page.reviews(), &before);
    assert!(sink.take().is_empty());
}

#[rstest]
#[tokio::test]
async fn empty_first_page_shows_empty_state(sink: Arc<RecordingTelemetrySink>) {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_list_reviews()
        .returning(|_| Ok(review_page(1, Vec::new(), false)));
    let mut page = page_with(&sink);

    page.load_reviews(&gateway).await;

    assert_eq!(page.reviews().view(), &ListView::Empty);
}

#[rstest]
#[tokio::test]
async fn load_more_appends_second_page(sink: Arc<RecordingTelemetrySink>) {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_list_reviews()
        .with(function(|query: &ReviewQuery| query.page == 1))
        .returning(|_| Ok(review_page(1, vec![review_with_id(1), review_with_id(2)], true)));
    gateway
        .expect_list_reviews()
        .with(function(|query: &ReviewQuery| query.page == 2))
        .returning(|_| Ok(review_page(2, vec![review_with_id(3), review_with_id(4)], false)));
    let mut page = page_with(&sink);
    page.load_reviews(&gateway).await;

    page.load_more(&gateway).await;

    assert_eq!(ids(&page), vec![1, 2, 3, 4]);
    assert_eq!(page.reviews().page(), 2);
}

#[rstest]
#[tokio::test]
async fn change_sort_requests_first_page_with_new_key(sink: Arc<RecordingTelemetrySink>) {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_list_reviews()
        .with(function(|query: &ReviewQuery| {
            query.page == 1 && query.sort.as_str() == "lowest"
        }))
        .times(1)
        .returning(|_| Ok(review_page(1, vec![rated_review(5, 1, "poor")], false)));
    let mut page = page_with(&sink);

    page.change_sort(&gateway, SortKey::new("lowest")).await;

    assert_eq!(ids(&page), vec![5]);
    assert_eq!(page.reviews().sort().as_str(), "lowest");
}

#[rstest]
#[tokio::test]
async fn later_page_failure_raises_error_notice(sink: Arc<RecordingTelemetrySink>) {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_list_reviews()
        .with(function(|query: &ReviewQuery| query.page == 1))
        .returning(|_| Ok(review_page(1, vec![review_with_id(1)], true)));
    gateway
        .expect_list_reviews()
        .with(function(|query: &ReviewQuery| query.page == 2))
        .returning(|_| {
            Err(ReviewApiError::Network {
                message: "timed out".to_owned(),
            })
        });
    let mut page = page_with(&sink);
    page.load_reviews(&gateway).await;

    page.load_more(&gateway).await;

    assert_eq!(ids(&page), vec![1]);
    let notice = page.notice().expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(
        notice.message,
        "Failed to load reviews: please try again later"
    );
    assert_eq!(
        sink.take().last(),
        Some(&TelemetryEvent::ReviewLoadFailed { page: 2 })
    );
}

#[rstest]
#[tokio::test]
async fn submit_without_rating_makes_no_request(sink: Arc<RecordingTelemetrySink>) {
    let mut gateway = MockReviewGateway::new();
    gateway.expect_create_review().times(0);
    let mut page = page_with(&sink);
    page.form_mut().open();

    let result = page.submit_review(&gateway).await;

    assert_eq!(result, Err(SubmissionError::MissingRating));
    assert_eq!(page.form().error(), Some("Please select a rating"));
    assert!(page.form().is_open());
}

#[rstest]
#[tokio::test]
async fn rejected_submission_keeps_form_and_page(sink: Arc<RecordingTelemetrySink>) {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_list_reviews()
        .returning(|_| Ok(review_page(1, vec![review_with_id(1)], true)));
    gateway
        .expect_create_review()
        .with(
            eq(course()),
            eq(NewReview {
                rating: 4,
                content: Some("ok".to_owned()),
                detailed: None,
            }),
        )
        .times(1)
        .returning(|_, _| {
            Err(ReviewApiError::Rejected {
                status: 400,
                message: Some("duplicate review".to_owned()),
            })
        });
    gateway.expect_course_summary().times(0);
    let mut page = page_with(&sink);
    page.load_reviews(&gateway).await;
    page.form_mut().open();
    page.form_mut().set_content("ok");
    page.form_mut()
        .ratings_mut()
        .select(RatingAxis::Overall, 4)
        .expect("valid rating");

    let result = page.submit_review(&gateway).await;

    assert!(matches!(result, Err(SubmissionError::Api(_))));
    assert!(page.form().is_open());
    assert_eq!(page.form().content(), "ok");
    assert_eq!(
        page.form().error(),
        Some("Failed to submit review: duplicate review")
    );
    assert_eq!(page.reviews().page(), 1);
    assert_eq!(ids(&page), vec![1]);
}

#[rstest]
#[tokio::test]
async fn accepted_submission_reloads_reviews_and_summary(sink: Arc<RecordingTelemetrySink>) {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_create_review()
        .with(eq(course()), always())
        .times(1)
        .returning(|_, _| {
            Ok(SubmissionReceipt {
                message: Some("Review submitted successfully".to_owned()),
            })
        });
    gateway
        .expect_list_reviews()
        .with(eq(first_page_query()))
        .times(1)
        .returning(|_| Ok(review_page(1, vec![rated_review(10, 4, "new")], false)));
    gateway
        .expect_course_summary()
        .with(eq(course()))
        .times(1)
        .returning(|_| {
            Ok(CourseSummary {
                id: 42,
                average_rating: 4.0,
                total_reviews: 1,
                ..CourseSummary::default()
            })
        });
    let mut page = page_with(&sink);
    page.form_mut().open();
    page.form_mut()
        .ratings_mut()
        .select(RatingAxis::Overall, 4)
        .expect("valid rating");

    let receipt = page
        .submit_review(&gateway)
        .await
        .expect("submission should succeed");

    assert_eq!(
        receipt.message.as_deref(),
        Some("Review submitted successfully")
    );
    assert!(!page.form().is_open());
    assert_eq!(page.form().ratings().input().overall, 0);
    assert_eq!(ids(&page), vec![10]);
    assert_eq!(page.summary().map(|summary| summary.total_reviews), Some(1));
    let notice = page.notice().expect("success notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert!(
        sink.take()
            .contains(&TelemetryEvent::ReviewSubmitted { course_id: 42 })
    );
}

#[rstest]
#[tokio::test]
async fn first_summary_seeds_gallery_and_later_ones_keep_position(
    sink: Arc<RecordingTelemetrySink>,
) {
    let mut gateway = MockReviewGateway::new();
    gateway.expect_course_summary().times(2).returning(|_| {
        Ok(CourseSummary {
            id: 42,
            cover_images: vec!["a.jpg".to_owned(), "b.jpg".to_owned()],
            ..CourseSummary::default()
        })
    });
    let mut page = page_with(&sink);

    page.load_course(&gateway).await;
    assert_eq!(page.gallery().current_image(), Some("/static/images/a.jpg"));
    page.gallery_mut().show_next();
    page.load_course(&gateway).await;

    assert_eq!(page.gallery().current_index(), 1);
}

#[rstest]
#[tokio::test]
async fn failed_summary_keeps_placeholder_gallery(sink: Arc<RecordingTelemetrySink>) {
    let mut gateway = MockReviewGateway::new();
    gateway.expect_course_summary().returning(|_| {
        Err(ReviewApiError::Rejected {
            status: 404,
            message: Some("Course not found".to_owned()),
        })
    });
    let mut page = page_with(&sink);

    page.load_course(&gateway).await;

    assert!(page.summary().is_none());
    assert_eq!(page.gallery().len(), 3);
}
