//! Coursescope library crate for browsing and reviewing courses.
//!
//! The library talks to a course review REST API, keeps the state of one
//! course's review page (cover gallery, paginated review list, rating
//! capture and review form), and renders it as a terminal user interface.

pub mod api;
pub mod config;
pub mod page;
pub mod telemetry;
pub mod tui;

pub use api::{
    ApiBase, CourseId, CourseSummary, HttpReviewGateway, NewReview, Review, ReviewApiError,
    ReviewGateway, ReviewPage, ReviewQuery, SessionCookie, SortKey, SubmissionReceipt,
};
pub use config::{CoursescopeConfig, OperationMode};
pub use page::{CoursePage, PageSettings};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
