//! Message types for the TUI update loop.
//!
//! Messages represent user actions, results of asynchronous requests, and
//! system events.

use crate::api::error::ReviewApiError;
use crate::api::locator::ReviewQuery;
use crate::api::models::{CourseSummary, ReviewPage, SubmissionReceipt};

/// Messages for the course page TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Review list
    /// Move the cursor to the previous review.
    CursorUp,
    /// Move the cursor to the next review.
    CursorDown,
    /// Fetch and append the next page.
    LoadMore,
    /// Switch to the next well-known sort key.
    CycleSort,
    /// Reload the first page.
    Reload,
    /// Dismiss the current notification.
    DismissNotice,

    // Gallery
    /// Show the next image.
    GalleryNext,
    /// Show the previous image.
    GalleryPrevious,

    // Review form
    /// Open the review form.
    OpenForm,
    /// Close the form and discard its contents.
    CloseForm,
    /// Move focus to the next star row or the text body.
    FocusNext,
    /// Preview one star fewer on the focused row.
    HoverLeft,
    /// Preview one star more on the focused row.
    HoverRight,
    /// Commit the previewed value on the focused row.
    CommitStar,
    /// Commit a value on the focused row directly.
    QuickSelect(u8),
    /// Append a character to the review text.
    InsertChar(char),
    /// Delete the last character of the review text.
    Backspace,
    /// Send the review.
    Submit,

    // Request results
    /// A review page request finished.
    ReviewsLoaded {
        /// Query that was sent.
        query: ReviewQuery,
        /// Outcome of the request.
        result: Result<ReviewPage, ReviewApiError>,
        /// Round-trip time in milliseconds.
        latency_ms: u64,
    },
    /// A course summary request finished.
    CourseLoaded(Result<CourseSummary, ReviewApiError>),
    /// A review submission finished.
    ReviewSubmitted(Result<SubmissionReceipt, ReviewApiError>),

    // Application lifecycle
    /// Synthetic startup message that triggers the first loads.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for messages that edit the review form.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::OpenForm
                | Self::CloseForm
                | Self::FocusNext
                | Self::HoverLeft
                | Self::HoverRight
                | Self::CommitStar
                | Self::QuickSelect(_)
                | Self::InsertChar(_)
                | Self::Backspace
                | Self::Submit
                | Self::ReviewSubmitted(_)
        )
    }

    /// Returns true for application lifecycle and window messages.
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::Initialized | Self::Quit | Self::ToggleHelp | Self::WindowResized { .. }
        )
    }
}
