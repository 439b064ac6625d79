//! Rendering logic for the course page TUI.
//!
//! These are pure query methods that read state without modification.

use super::CoursePageApp;
use crate::page::NoticeKind;
use crate::tui::components::stars::average_label;
use crate::tui::components::{
    BreakdownComponent, BreakdownViewContext, GalleryComponent, RatingFormComponent,
    RatingFormViewContext, ReviewListComponent, ReviewListViewContext, truncate_to_width,
};

impl CoursePageApp {
    fn max_width(&self) -> usize {
        usize::from(self.width).max(1)
    }

    /// Renders the two-row course header.
    pub(super) fn render_header(&self) -> String {
        let loading = if self.page.reviews().is_loading() {
            " [Loading...]"
        } else {
            ""
        };
        let Some(summary) = self.page.summary() else {
            return format!(
                "Course {}{loading}\nLoading course details...\n",
                self.page.course_id()
            );
        };

        let title = summary.title.as_deref().unwrap_or("Untitled course");
        let mut details = average_label(summary.average_rating);
        details.push_str(&format!(" ({} reviews)", summary.total_reviews));
        if let Some(instructor) = summary.instructor.as_deref() {
            details.push_str(&format!("  Instructor: {instructor}"));
        }
        format!(
            "{}\n{}\n",
            truncate_to_width(&format!("{title}{loading}"), self.max_width()),
            truncate_to_width(&details, self.max_width())
        )
    }

    /// Renders the gallery panel.
    pub(super) fn render_gallery(&self) -> String {
        GalleryComponent::view(self.page.gallery(), self.max_width())
    }

    /// Renders the rating breakdown.
    pub(super) fn render_breakdown(&self) -> String {
        let reviews = self.page.reviews();
        BreakdownComponent::view(&BreakdownViewContext {
            breakdown: reviews.breakdown(),
            statistics: reviews.statistics(),
        })
    }

    /// Renders the sort key and paging position.
    pub(super) fn render_sort_bar(&self) -> String {
        let reviews = self.page.reviews();
        let total = reviews
            .page_info()
            .total_items()
            .map(|total| format!(" of {total}"))
            .unwrap_or_default();
        format!(
            "Sort: {}  Page {}  Showing {}{total}\n",
            reviews.sort(),
            reviews.page_info().current_page(),
            reviews.reviews().len()
        )
    }

    /// Renders the review list, or the form when it is open.
    pub(super) fn render_body(&self) -> String {
        let form = self.page.form();
        if form.is_open() {
            return RatingFormComponent::view(&RatingFormViewContext {
                form,
                max_width: self.max_width(),
            });
        }

        let reviews = self.page.reviews();
        ReviewListComponent::view(&ReviewListViewContext {
            reviews: reviews.reviews(),
            view: reviews.view(),
            cursor_position: self.cursor_position,
            scroll_offset: self.scroll_offset,
            visible_height: self.body_height(),
            max_width: self.max_width(),
            can_load_more: reviews.can_load_more(),
            loading: reviews.is_loading(),
        })
    }

    /// Renders the transient notification row, blank when there is none.
    pub(super) fn render_notice(&self) -> String {
        match self.page.notice() {
            Some(notice) => {
                let marker = match notice.kind {
                    NoticeKind::Success => "OK",
                    NoticeKind::Error => "!!",
                };
                format!("{marker} {}\n", notice.message)
            }
            None => "\n".to_owned(),
        }
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }
        if self.page.form().is_open() {
            return "Tab:next  Left/Right:preview  Enter:rate  1-5:quick  Ctrl+S:submit  Esc:cancel\n"
                .to_owned();
        }
        format!("{}\n", self.review_list_status_hints())
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Reviews:
  j, Down    Select next review
  k, Up      Select previous review
  n          Load more reviews
  s          Cycle sort order (newest/highest/lowest)
  r          Reload reviews and course details
  Esc        Dismiss notification

Gallery:
  >, Right   Next image
  <, Left    Previous image

Review form:
  w          Write a review
  Tab        Next rating row or the review text
  Left/Right Preview fewer or more stars
  Enter      Commit the previewed stars
  1-5        Rate the focused row directly
  Backspace  Delete one character
  Ctrl+S     Submit the review
  Esc        Discard the review

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    const fn review_list_status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  j/k:move  n:more  s:sort  w:write"
        } else {
            "j/k:move  n:more  s:sort  r:reload  </>:gallery  w:write  ?:help  q:quit"
        }
    }
}
