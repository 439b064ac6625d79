//! One-shot course summary operation.

use std::sync::Arc;

use coursescope::{CoursePage, CoursescopeConfig, NoopTelemetrySink, ReviewApiError};

use super::build_gateway;
use super::output::write_course_summary;

/// Loads the first page of reviews and the course header, then prints them.
///
/// A failed review load is printed in place of the list rather than
/// returned, matching what the interactive page shows.
///
/// # Errors
///
/// Returns [`ReviewApiError::Configuration`] if required configuration is
/// missing and [`ReviewApiError::Io`] if stdout cannot be written.
pub async fn run(config: &CoursescopeConfig) -> Result<(), ReviewApiError> {
    let settings = config.page_settings()?;
    let gateway = build_gateway(config)?;

    let mut page = CoursePage::new(&settings, Arc::new(NoopTelemetrySink));
    page.load_reviews(&gateway).await;
    page.load_course(&gateway).await;

    write_course_summary(&page)
}
