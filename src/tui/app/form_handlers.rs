//! Review form handlers.
//!
//! Star rows preview on Left/Right and commit on Enter or a digit; the
//! text body takes typed characters. Submission runs as a command and its
//! result restarts the review list before refreshing the course header.

use bubbletea_rs::Cmd;

use super::CoursePageApp;
use super::commands::{create_review_cmd, fetch_reviews_cmd};
use crate::api::error::ReviewApiError;
use crate::api::models::{MAX_RATING, SubmissionReceipt};
use crate::page::{FormFocus, RatingAxis};
use crate::tui::messages::AppMsg;

impl CoursePageApp {
    /// Dispatches review form messages.
    ///
    /// Editing messages are ignored while the form is closed.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenForm => {
                self.page.form_mut().open();
                None
            }
            AppMsg::ReviewSubmitted(result) => self.handle_review_submitted(result),
            _ if !self.page.form().is_open() => None,
            AppMsg::CloseForm => {
                if !self.page.form().is_submitting() {
                    self.page.form_mut().close();
                }
                None
            }
            AppMsg::FocusNext => {
                self.page.form_mut().focus_next();
                None
            }
            AppMsg::HoverLeft => {
                self.step_preview(false);
                None
            }
            AppMsg::HoverRight => {
                self.step_preview(true);
                None
            }
            AppMsg::CommitStar => {
                self.commit_preview();
                None
            }
            AppMsg::QuickSelect(value) => {
                self.select_focused(*value);
                None
            }
            AppMsg::InsertChar(character) => {
                if self.page.form().focus() == FormFocus::Content {
                    self.page.form_mut().push_char(*character);
                }
                None
            }
            AppMsg::Backspace => {
                if self.page.form().focus() == FormFocus::Content {
                    self.page.form_mut().pop_char();
                }
                None
            }
            AppMsg::Submit => self.handle_submit(),
            _ => {
                // Unreachable: caller filters to form messages.
                None
            }
        }
    }

    fn focused_axis(&self) -> Option<RatingAxis> {
        match self.page.form().focus() {
            FormFocus::Stars(axis) => Some(axis),
            FormFocus::Content => None,
        }
    }

    /// Moves the preview on the focused row one star left or right,
    /// starting from whatever is currently drawn.
    fn step_preview(&mut self, forward: bool) {
        let Some(axis) = self.focused_axis() else {
            return;
        };
        let shown = self.page.form().ratings().star_row(axis).filled;
        let next = if forward {
            shown.saturating_add(1).min(MAX_RATING)
        } else {
            shown.saturating_sub(1)
        };
        let ratings = self.page.form_mut().ratings_mut();
        if next == 0 {
            ratings.leave(axis);
        } else {
            ratings.hover(axis, next);
        }
    }

    fn commit_preview(&mut self) {
        let Some(axis) = self.focused_axis() else {
            return;
        };
        let preview = self
            .page
            .form()
            .ratings()
            .preview()
            .filter(|(previewed, _)| *previewed == axis);
        if let Some((_, value)) = preview {
            self.select_focused(value);
        }
    }

    fn select_focused(&mut self, value: u8) {
        let Some(axis) = self.focused_axis() else {
            return;
        };
        if let Err(error) = self.page.form_mut().ratings_mut().select(axis, value) {
            tracing::debug!(%error, "ignoring rating selection");
        }
    }

    fn handle_submit(&mut self) -> Option<Cmd> {
        let gateway = self.require_gateway()?;
        match self.page.begin_submission() {
            Ok((course_id, review)) => Some(create_review_cmd(gateway, course_id, review)),
            Err(error) => {
                tracing::debug!(%error, "review not submitted");
                None
            }
        }
    }

    fn handle_review_submitted(
        &mut self,
        result: &Result<SubmissionReceipt, ReviewApiError>,
    ) -> Option<Cmd> {
        let gateway = self.require_gateway()?;
        let reload = self.page.finish_submission(result);
        if result.is_err() {
            return None;
        }
        self.refresh_summary_pending = true;
        match reload {
            Some(query) => Some(fetch_reviews_cmd(gateway, query)),
            None => self.take_summary_refresh(),
        }
    }
}
