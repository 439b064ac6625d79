//! Startup context storage for the course page TUI.
//!
//! `Model::init` is a static function, so everything the model needs from
//! the CLI wiring (gateway, page settings, telemetry sink) is parked in
//! `OnceLock` values before the program starts.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::api::gateway::ReviewGateway;
use crate::page::PageSettings;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the launch context.
///
/// This is set before the TUI program starts and read by
/// `CoursePageApp::init()`.
static LAUNCH_CONTEXT: OnceLock<LaunchContext> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts and read by
/// `CoursePageApp::init()` so the first frame uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Everything the course page needs to talk to the API.
#[derive(Clone)]
pub struct LaunchContext {
    /// Gateway used for every request.
    pub gateway: Arc<dyn ReviewGateway>,
    /// Course, sort and gallery settings.
    pub settings: PageSettings,
    /// Sink for page load and submission events.
    pub telemetry: Arc<dyn TelemetrySink>,
}

impl LaunchContext {
    /// Creates a context with a no-op telemetry sink.
    #[must_use]
    pub fn new(gateway: Arc<dyn ReviewGateway>, settings: PageSettings) -> Self {
        Self {
            gateway,
            settings,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }
}

impl std::fmt::Debug for LaunchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Sets the launch context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without
/// it the page starts with an error in the status bar and makes no
/// requests.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_launch_context(context: LaunchContext) -> bool {
    LAUNCH_CONTEXT.set(context).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Gets a clone of the launch context, if configured.
pub(crate) fn get_launch_context() -> Option<LaunchContext> {
    LAUNCH_CONTEXT.get().cloned()
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to the live terminal size, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
