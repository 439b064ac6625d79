//! TUI mode for a course review page.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that shows the gallery and reviews and accepts new reviews.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use coursescope::tui::{CoursePageApp, LaunchContext, set_launch_context};
use coursescope::{
    CoursescopeConfig, NoopTelemetrySink, ReviewApiError, StderrJsonlTelemetrySink, TelemetrySink,
};

use super::build_gateway;

/// Runs the TUI mode for one course.
///
/// # Errors
///
/// Returns an error if:
/// - The course id is missing or invalid
/// - The API base or session cookie is unusable
/// - The TUI fails to initialise
pub async fn run(config: &CoursescopeConfig) -> Result<(), ReviewApiError> {
    let settings = config.page_settings()?;
    let gateway = build_gateway(config)?;
    let telemetry: Arc<dyn TelemetrySink> = if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };

    // Model::init() reads the context from module-level storage. If one is
    // already set, the existing context is kept.
    let context = LaunchContext::new(Arc::new(gateway), settings).with_telemetry(telemetry);
    if !set_launch_context(context) {
        tracing::debug!("launch context already set; keeping the existing one");
    }

    run_tui().await.map_err(|error| ReviewApiError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `CoursePageApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<CoursePageApp>::builder()
        .alt_screen(true)
        .build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use coursescope::tui::CoursePageApp;

    #[test]
    fn unconfigured_app_starts_on_first_review() {
        let app = CoursePageApp::unconfigured();

        assert_eq!(app.cursor_position(), 0);
        assert!(app.page().reviews().reviews().is_empty());
    }
}
