//! Review list, gallery and request-result handlers.
//!
//! Review loads go through the controller's `begin_*` methods, so a load
//! requested while another is in flight is dropped before any command is
//! built.

use std::time::Duration;

use bubbletea_rs::Cmd;

use super::CoursePageApp;
use super::commands::{course_summary_cmd, fetch_reviews_cmd};
use crate::api::error::ReviewApiError;
use crate::api::locator::ReviewQuery;
use crate::api::models::ReviewPage;
use crate::page::{LoadOutcome, ReviewListController};
use crate::tui::messages::AppMsg;

impl CoursePageApp {
    /// Dispatches review list, gallery and result messages.
    pub(super) fn handle_review_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                self.adjust_scroll_to_cursor();
                None
            }
            AppMsg::CursorDown => {
                self.cursor_position = self.cursor_position.saturating_add(1);
                self.adjust_scroll_to_cursor();
                None
            }
            AppMsg::LoadMore => self.handle_load_more(),
            AppMsg::CycleSort => self.handle_cycle_sort(),
            AppMsg::Reload => self.reload_with_summary(ReviewListController::restart),
            AppMsg::DismissNotice => {
                self.page.clear_notice();
                self.error = None;
                None
            }
            AppMsg::GalleryNext => {
                self.page.gallery_mut().show_next();
                None
            }
            AppMsg::GalleryPrevious => {
                self.page.gallery_mut().show_previous();
                None
            }
            AppMsg::ReviewsLoaded {
                query,
                result,
                latency_ms,
            } => self.handle_reviews_loaded(query, result, *latency_ms),
            AppMsg::CourseLoaded(result) => {
                self.page.apply_summary(result.clone());
                None
            }
            _ => {
                // Unreachable: caller routes form and lifecycle messages
                // elsewhere.
                None
            }
        }
    }

    /// Starts a review load; the course summary is refreshed once the
    /// reviews arrive, or straight away when the load was dropped.
    pub(super) fn reload_with_summary<F>(&mut self, begin: F) -> Option<Cmd>
    where
        F: FnOnce(&mut ReviewListController) -> Option<ReviewQuery>,
    {
        let gateway = self.require_gateway()?;
        self.refresh_summary_pending = true;
        match begin(self.page.reviews_mut()) {
            Some(query) => Some(fetch_reviews_cmd(gateway, query)),
            None => self.take_summary_refresh(),
        }
    }

    /// Returns the pending summary refresh command, if one is owed.
    pub(super) fn take_summary_refresh(&mut self) -> Option<Cmd> {
        if !self.refresh_summary_pending {
            return None;
        }
        self.refresh_summary_pending = false;
        let gateway = self.require_gateway()?;
        Some(course_summary_cmd(gateway, self.page.course_id()))
    }

    /// Ignored while a load is in flight, so the page counter is not
    /// advanced past a page that has not arrived yet.
    fn handle_load_more(&mut self) -> Option<Cmd> {
        let reviews = self.page.reviews();
        if reviews.is_loading() || !reviews.can_load_more() {
            return None;
        }
        let gateway = self.require_gateway()?;
        self.page.clear_notice();
        let query = self.page.reviews_mut().load_more()?;
        Some(fetch_reviews_cmd(gateway, query))
    }

    fn handle_cycle_sort(&mut self) -> Option<Cmd> {
        let gateway = self.require_gateway()?;
        let sort = self.page.reviews().sort().cycled();
        let query = self.page.reviews_mut().change_sort(sort)?;
        Some(fetch_reviews_cmd(gateway, query))
    }

    fn handle_reviews_loaded(
        &mut self,
        query: &ReviewQuery,
        result: &Result<ReviewPage, ReviewApiError>,
        latency_ms: u64,
    ) -> Option<Cmd> {
        let outcome =
            self.page
                .finish_reviews(query, result.clone(), Duration::from_millis(latency_ms));
        if matches!(outcome, LoadOutcome::Replaced { .. }) {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        }
        self.adjust_scroll_to_cursor();
        self.take_summary_refresh()
    }
}
