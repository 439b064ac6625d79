//! Pagination state reported by the review endpoint.
//!
//! The server attaches a `pagination` object next to `data` in the review
//! envelope. Only `has_next` drives behaviour; the remaining fields are kept
//! so views can show position information when the server provides it.

/// Page position for a fetched page of reviews.
///
/// # Example
///
/// ```
/// use coursescope::api::pagination::PageInfo;
///
/// let info = PageInfo::new(2)
///     .with_total_pages(Some(5))
///     .with_has_next(true)
///     .with_has_prev(true);
/// assert!(!info.is_first_page());
/// assert!(info.has_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Items per page, if reported.
    per_page: Option<u32>,
    /// Total number of reviews, if reported.
    total_items: Option<u64>,
    /// Total number of pages, if reported.
    total_pages: Option<u32>,
    /// Whether more pages exist after the current one.
    has_next: bool,
    /// Whether pages exist before the current one.
    has_prev: bool,
}

impl PageInfo {
    /// Creates page info for `current_page` with nothing else known.
    #[must_use]
    pub const fn new(current_page: u32) -> Self {
        Self {
            current_page,
            per_page: None,
            total_items: None,
            total_pages: None,
            has_next: false,
            has_prev: false,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: Option<u32>) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the total number of reviews.
    #[must_use]
    pub const fn with_total_items(mut self, total_items: Option<u64>) -> Self {
        self.total_items = total_items;
        self
    }

    /// Sets the total number of pages.
    #[must_use]
    pub const fn with_total_pages(mut self, total_pages: Option<u32>) -> Self {
        self.total_pages = total_pages;
        self
    }

    /// Sets whether there is a next page.
    #[must_use]
    pub const fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Sets whether there is a previous page.
    #[must_use]
    pub const fn with_has_prev(mut self, has_prev: bool) -> Self {
        self.has_prev = has_prev;
        self
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the page size if reported.
    #[must_use]
    pub const fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    /// Returns the total number of reviews if reported.
    #[must_use]
    pub const fn total_items(&self) -> Option<u64> {
        self.total_items
    }

    /// Returns the total number of pages if reported.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.has_prev
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page == 1
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::PageInfo;

    #[test]
    fn default_is_first_page_without_next() {
        let info = PageInfo::default();

        assert!(info.is_first_page());
        assert!(!info.has_next());
        assert!(!info.has_prev());
        assert_eq!(info.total_pages(), None);
    }

    #[test]
    fn builder_sets_all_fields() {
        let info = PageInfo::new(3)
            .with_per_page(Some(10))
            .with_total_items(Some(42))
            .with_total_pages(Some(5))
            .with_has_next(true)
            .with_has_prev(true);

        assert_eq!(info.current_page(), 3);
        assert_eq!(info.per_page(), Some(10));
        assert_eq!(info.total_items(), Some(42));
        assert_eq!(info.total_pages(), Some(5));
        assert!(info.has_next());
        assert!(info.has_prev());
    }
}
