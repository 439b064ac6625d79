//! Review list controller: paging, sorting and the single-flight guard.
//!
//! The controller is pure state. [`ReviewListController::begin_load`] hands
//! out the query to fetch, or `None` when a fetch is already in flight, and
//! [`ReviewListController::complete_load`] applies the outcome. Callers
//! perform the request in between, which keeps the controller usable from
//! both async code and the terminal UI's command loop.
//!
//! Whether a response replaces or extends the list is decided by the page
//! the request asked for, not by whatever page the controller has moved to
//! since.

use crate::api::error::ReviewApiError;
use crate::api::locator::{CourseId, ReviewQuery, SortKey};
use crate::api::models::{RatingBreakdown, Review, ReviewPage, ReviewStatistics};
use crate::api::pagination::PageInfo;


/// Message shown when a course has no reviews yet.
pub const EMPTY_REVIEWS_MESSAGE: &str = "No reviews yet. Be the first to review this course!";

/// Message shown in place of the list when the first page fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load reviews";

/// What the list area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// First page requested, nothing to show yet.
    Loading,
    /// One or more review cards.
    Reviews,
    /// The course has no reviews.
    Empty,
    /// The first page failed; the message is shown instead of cards.
    Failed(String),
}

/// Result of applying a fetch outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Page 1 arrived and replaced the list.
    Replaced {
        /// Number of reviews now listed.
        count: usize,
    },
    /// A later page arrived and was appended.
    Appended {
        /// Number of reviews added.
        added: usize,
    },
    /// The request failed.
    Failed {
        /// Page that was requested.
        page: u32,
        /// Reason suitable for display.
        message: String,
    },
}

/// Paging and sorting state for one course's reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewListController {
    course_id: CourseId,
    sort: SortKey,
    page: u32,
    loading: bool,
    reviews: Vec<Review>,
    breakdown: RatingBreakdown,
    statistics: Option<ReviewStatistics>,
    page_info: PageInfo,
    view: ListView,
}

impl ReviewListController {
    /// Creates an idle controller positioned on page 1.
    #[must_use]
    pub fn new(course_id: CourseId, sort: SortKey) -> Self {
        Self {
            course_id,
            sort,
            page: 1,
            loading: false,
            reviews: Vec::new(),
            breakdown: RatingBreakdown::default(),
            statistics: None,
            page_info: PageInfo::default(),
            view: ListView::Loading,
        }
    }

    /// Course whose reviews are listed.
    #[must_use]
    pub const fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Active sort key.
    #[must_use]
    pub const fn sort(&self) -> &SortKey {
        &self.sort
    }

    /// Page the next load will request.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Reviews fetched so far, in display order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Rating distribution from the last first-page response.
    #[must_use]
    pub const fn breakdown(&self) -> &RatingBreakdown {
        &self.breakdown
    }

    /// Statistics from the last first-page response.
    #[must_use]
    pub const fn statistics(&self) -> Option<&ReviewStatistics> {
        self.statistics.as_ref()
    }

    /// Pagination metadata from the last successful response.
    #[must_use]
    pub const fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// What the list area shows.
    #[must_use]
    pub const fn view(&self) -> &ListView {
        &self.view
    }

    /// Whether the "load more" control is offered.
    #[must_use]
    pub const fn can_load_more(&self) -> bool {
        self.page_info.has_next()
    }

    /// Starts a load of the current page if none is in flight.
    ///
    /// Returns the query to send, or `None` when the request is dropped.
    /// Loading page 1 clears the list and shows the loading placeholder.
    pub fn begin_load(&mut self) -> Option<ReviewQuery> {
        if self.loading {
            tracing::debug!(page = self.page, "review load already in flight; dropping");
            return None;
        }
        self.loading = true;
        if self.page == 1 {
            self.reviews.clear();
            self.view = ListView::Loading;
        }
        Some(ReviewQuery {
            course_id: self.course_id,
            page: self.page,
            sort: self.sort.clone(),
        })
    }

    /// Applies the outcome of the fetch started for `query`.
    ///
    /// Always releases the in-flight guard. A failed first page replaces the
    /// list with an error placeholder and hides "load more"; a failed later
    /// page keeps what is shown and steps the page back so the next
    /// "load more" retries it.
    pub fn complete_load(
        &mut self,
        query: &ReviewQuery,
        result: Result<ReviewPage, ReviewApiError>,
    ) -> LoadOutcome {
        self.loading = false;
        match result {
            Ok(page) if query.page <= 1 => self.replace(page),
            Ok(page) => self.append(page),
            Err(error) => self.fail(query, &error),
        }
    }

    /// Switches the sort order and reloads from page 1.
    pub fn change_sort(&mut self, sort: SortKey) -> Option<ReviewQuery> {
        self.sort = sort;
        self.page = 1;
        self.begin_load()
    }

    /// Advances to the next page and loads it.
    ///
    /// The page advances even when the load is dropped, mirroring the
    /// page counter the list was built against.
    pub fn load_more(&mut self) -> Option<ReviewQuery> {
        self.page = self.page.saturating_add(1);
        self.begin_load()
    }

    /// Returns to page 1 and reloads.
    pub fn restart(&mut self) -> Option<ReviewQuery> {
        self.page = 1;
        self.begin_load()
    }

    fn replace(&mut self, page: ReviewPage) -> LoadOutcome {
        self.reviews = page.reviews;
        self.breakdown = page.breakdown;
        self.statistics = page.statistics;
        self.page_info = page.page_info;
        self.view = if self.reviews.is_empty() {
            ListView::Empty
        } else {
            ListView::Reviews
        };
        LoadOutcome::Replaced {
            count: self.reviews.len(),
        }
    }

    fn append(&mut self, page: ReviewPage) -> LoadOutcome {
        let added = page.reviews.len();
        self.reviews.extend(page.reviews);
        self.page_info = page.page_info;
        if !self.reviews.is_empty() {
            self.view = ListView::Reviews;
        }
        LoadOutcome::Appended { added }
    }

    fn fail(&mut self, query: &ReviewQuery, error: &ReviewApiError) -> LoadOutcome {
        tracing::warn!(page = query.page, %error, "loading reviews failed");
        let message = format!("{LOAD_FAILED_MESSAGE}: {}", error.user_message());
        if query.page <= 1 {
            self.reviews.clear();
            self.page_info = PageInfo::default();
            self.view = ListView::Failed(message.clone());
        } else if self.page == query.page {
            self.page = query.page.saturating_sub(1).max(1);
        }
        LoadOutcome::Failed {
            page: query.page,
            message,
        }
    }
}
