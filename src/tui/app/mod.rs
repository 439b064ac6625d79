//! Main TUI application model implementing the MVU pattern.
//!
//! [`CoursePageApp`] wraps a [`CoursePage`] with the terminal-only state
//! (cursor, scroll offset, dimensions, help overlay) and turns page
//! operations into bubbletea-rs commands.
//!
//! # Module Structure
//!
//! - `commands`: async request commands and their result messages
//! - `form_handlers`: review form editing and submission
//! - `lifecycle_handlers`: startup, quit, help and resize
//! - `model_impl`: the `bubbletea_rs::Model` implementation
//! - `rendering`: view rendering methods
//! - `review_handlers`: review list, gallery and request results

use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::components::{
    BreakdownComponent, BreakdownViewContext, GalleryComponent, ReviewListComponent,
};
use super::messages::AppMsg;
use super::storage::LaunchContext;
use crate::api::gateway::ReviewGateway;
use crate::api::locator::{CourseId, SortKey};
use crate::page::gallery::DEFAULT_ASSET_BASE;
use crate::page::{CoursePage, PageSettings};
use crate::telemetry::NoopTelemetrySink;

mod commands;
mod form_handlers;
mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod review_handlers;


/// Status shown when the program starts without a launch context.
pub(crate) const MISSING_CONTEXT_MESSAGE: &str = "Course API context not configured";

/// Rows taken by the header.
const HEADER_HEIGHT: usize = 2;
/// Rows taken by the sort bar, notice line and status bar.
const FOOTER_HEIGHT: usize = 3;

/// Main application model for the course page TUI.
pub struct CoursePageApp {
    /// Page state: gallery, review list, form, summary and notice.
    pub(crate) page: CoursePage,
    /// Gateway for requests; absent when launched without a context.
    gateway: Option<Arc<dyn ReviewGateway>>,
    /// Index of the selected review.
    cursor_position: usize,
    /// Index of the first card shown.
    scroll_offset: usize,
    /// Application-level error shown in the status bar.
    pub(crate) error: Option<String>,
    /// Whether the next completed review load should refresh the summary.
    refresh_summary_pending: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Whether the startup message has been handled.
    has_initialized: bool,
}

impl std::fmt::Debug for CoursePageApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoursePageApp")
            .field("page", &self.page)
            .field("cursor_position", &self.cursor_position)
            .field("scroll_offset", &self.scroll_offset)
            .field("error", &self.error)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl CoursePageApp {
    /// Creates an application for `page` that sends requests through
    /// `gateway`.
    #[must_use]
    pub fn new(page: CoursePage, gateway: Arc<dyn ReviewGateway>) -> Self {
        Self::assemble(page, Some(gateway))
    }

    /// Creates an application from a launch context.
    #[must_use]
    pub fn from_context(context: LaunchContext) -> Self {
        let page = CoursePage::new(&context.settings, context.telemetry);
        Self::new(page, context.gateway)
    }

    /// Creates an application that reports a missing launch context and
    /// never issues requests.
    #[must_use]
    pub fn unconfigured() -> Self {
        let settings = PageSettings {
            course_id: CourseId::MIN,
            sort: SortKey::default(),
            asset_base: DEFAULT_ASSET_BASE.to_owned(),
            detailed_ratings: false,
        };
        let page = CoursePage::new(&settings, Arc::new(NoopTelemetrySink));
        let mut app = Self::assemble(page, None);
        app.error = Some(MISSING_CONTEXT_MESSAGE.to_owned());
        app
    }

    /// Sets explicit terminal dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self.adjust_scroll_to_cursor();
        self
    }

    const fn assemble(page: CoursePage, gateway: Option<Arc<dyn ReviewGateway>>) -> Self {
        Self {
            page,
            gateway,
            cursor_position: 0,
            scroll_offset: 0,
            error: None,
            refresh_summary_pending: false,
            width: 80,
            height: 24,
            show_help: false,
            has_initialized: false,
        }
    }

    /// Page state.
    #[must_use]
    pub const fn page(&self) -> &CoursePage {
        &self.page
    }

    /// Index of the selected review.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Index of the first card shown.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Returns a command for any request the message starts.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_lifecycle() {
            return self.handle_lifecycle_msg(msg);
        }
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        self.handle_review_msg(msg)
    }

    /// Returns the gateway, recording an error when none is configured.
    fn require_gateway(&mut self) -> Option<Arc<dyn ReviewGateway>> {
        let gateway = self.gateway.clone();
        if gateway.is_none() {
            self.error = Some(MISSING_CONTEXT_MESSAGE.to_owned());
        }
        gateway
    }

    /// Rows available to the review list or the open form.
    pub(crate) fn body_height(&self) -> usize {
        let reviews = self.page.reviews();
        let breakdown = BreakdownViewContext {
            breakdown: reviews.breakdown(),
            statistics: reviews.statistics(),
        };
        usize::from(self.height)
            .saturating_sub(HEADER_HEIGHT)
            .saturating_sub(GalleryComponent::HEIGHT)
            .saturating_sub(BreakdownComponent::height(&breakdown))
            .saturating_sub(FOOTER_HEIGHT)
            .max(1)
    }

    /// Keeps the cursor inside the list and the selected card on screen.
    pub(crate) fn adjust_scroll_to_cursor(&mut self) {
        let count = self.page.reviews().reviews().len();
        self.cursor_position = self.cursor_position.min(count.saturating_sub(1));

        let visible = ReviewListComponent::visible_cards(self.body_height());
        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
        } else if self.cursor_position >= self.scroll_offset.saturating_add(visible) {
            self.scroll_offset = self
                .cursor_position
                .saturating_add(1)
                .saturating_sub(visible);
        }
        self.scroll_offset = self.scroll_offset.min(count.saturating_sub(1));
    }
}
