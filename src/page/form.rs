//! Review submission form state.

use super::error::{MISSING_RATING_MESSAGE, SubmissionError};
use super::rating::{RatingAxis, RatingCapture};
use crate::api::error::ReviewApiError;
use crate::api::models::{NewReview, SubmissionReceipt};

/// Which part of the form receives input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormFocus {
    /// A star row.
    Stars(RatingAxis),
    /// The free-text review body.
    #[default]
    Content,
}

/// The review form: open flag, text, ratings and the last error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    open: bool,
    submitting: bool,
    detailed: bool,
    content: String,
    ratings: RatingCapture,
    focus: FormFocus,
    error: Option<String>,
}

impl ReviewForm {
    /// Creates a closed form. `detailed` enables the sub-rating axes.
    #[must_use]
    pub fn new(detailed: bool) -> Self {
        Self {
            detailed,
            focus: FormFocus::Stars(RatingAxis::Overall),
            ..Self::default()
        }
    }

    /// Whether the form is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a submission awaits a response.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether sub-rating axes are shown and sent.
    #[must_use]
    pub const fn is_detailed(&self) -> bool {
        self.detailed
    }

    /// Current review text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Star rating state.
    #[must_use]
    pub const fn ratings(&self) -> &RatingCapture {
        &self.ratings
    }

    /// Mutable star rating state.
    pub const fn ratings_mut(&mut self) -> &mut RatingCapture {
        &mut self.ratings
    }

    /// Focused part of the form.
    #[must_use]
    pub const fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Last validation or submission error shown in the form.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Axes the form offers, overall first.
    #[must_use]
    pub fn axes(&self) -> Vec<RatingAxis> {
        let mut axes = vec![RatingAxis::Overall];
        if self.detailed {
            axes.extend(RatingAxis::DETAILED);
        }
        axes
    }

    /// Opens the form with focus on the overall stars.
    pub const fn open(&mut self) {
        self.open = true;
        self.focus = FormFocus::Stars(RatingAxis::Overall);
    }

    /// Closes the form and discards its contents.
    pub fn close(&mut self) {
        *self = Self::new(self.detailed);
    }

    /// Moves focus to the next star row or the text body, wrapping.
    pub fn focus_next(&mut self) {
        let axes = self.axes();
        let next = match self.focus {
            FormFocus::Content => axes
                .first()
                .copied()
                .map_or(FormFocus::Content, FormFocus::Stars),
            FormFocus::Stars(current) => {
                self.ratings.leave(current);
                axes.iter()
                    .position(|axis| *axis == current)
                    .and_then(|index| axes.get(index.saturating_add(1)))
                    .copied()
                    .map_or(FormFocus::Content, FormFocus::Stars)
            }
        };
        self.focus = next;
    }

    /// Appends a character to the review text.
    pub fn push_char(&mut self, character: char) {
        self.content.push(character);
    }

    /// Removes the last character of the review text.
    pub fn pop_char(&mut self) {
        self.content.pop();
    }

    /// Replaces the review text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Validates the form and builds the request body.
    ///
    /// Marks the form as submitting on success so a second submit is
    /// refused until [`ReviewForm::complete`] runs.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::MissingRating`] when no overall rating is
    /// selected, and [`SubmissionError::InFlight`] while a previous
    /// submission is outstanding.
    pub fn prepare(&mut self) -> Result<NewReview, SubmissionError> {
        if self.submitting {
            return Err(SubmissionError::InFlight);
        }
        let input = *self.ratings.input();
        if input.overall == 0 {
            self.error = Some(MISSING_RATING_MESSAGE.to_owned());
            return Err(SubmissionError::MissingRating);
        }

        let trimmed = self.content.trim();
        let review = NewReview {
            rating: input.overall,
            content: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
            detailed: self.detailed.then(|| input.detailed()),
        };
        self.error = None;
        self.submitting = true;
        Ok(review)
    }

    /// Applies the server's answer to a submission.
    ///
    /// Success closes and resets the form; failure keeps every field and
    /// shows the server reason or a generic one.
    pub fn complete(&mut self, result: &Result<SubmissionReceipt, ReviewApiError>) {
        self.submitting = false;
        match result {
            Ok(_) => self.close(),
            Err(error) => {
                self.error = Some(format!(
                    "Failed to submit review: {}",
                    error.user_message()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{FormFocus, ReviewForm};
    use crate::api::error::ReviewApiError;
    use crate::api::models::{DetailedRatings, SubmissionReceipt};
    use crate::page::error::SubmissionError;
    use crate::page::rating::RatingAxis;

    fn rated_form(detailed: bool, overall: u8) -> ReviewForm {
        let mut form = ReviewForm::new(detailed);
        form.open();
        form.ratings_mut()
            .select(RatingAxis::Overall, overall)
            .expect("valid rating");
        form
    }

    #[test]
    fn prepare_without_rating_sets_message() {
        let mut form = ReviewForm::new(false);
        form.open();

        let result = form.prepare();

        assert_eq!(result, Err(SubmissionError::MissingRating));
        assert_eq!(form.error(), Some("Please select a rating"));
        assert!(!form.is_submitting());
    }

    #[rstest]
    #[case::blank("   ", None)]
    #[case::padded("  solid course \n", Some("solid course"))]
    fn prepare_trims_content(#[case] content: &str, #[case] expected: Option<&str>) {
        let mut form = rated_form(false, 4);
        form.set_content(content);

        let review = form.prepare().expect("form should be valid");

        assert_eq!(review.rating, 4);
        assert_eq!(review.content.as_deref(), expected);
        assert_eq!(review.detailed, None);
    }

    #[test]
    fn prepare_includes_sub_ratings_when_detailed() {
        let mut form = rated_form(true, 5);
        form.ratings_mut()
            .select(RatingAxis::LearningGain, 3)
            .expect("valid rating");

        let review = form.prepare().expect("form should be valid");

        assert_eq!(
            review.detailed,
            Some(DetailedRatings {
                learning_gain: Some(3),
                workload: None,
                difficulty: None,
            })
        );
    }

    #[test]
    fn second_prepare_is_refused_while_submitting() {
        let mut form = rated_form(false, 2);
        form.prepare().expect("first submission should be accepted");

        assert_eq!(form.prepare(), Err(SubmissionError::InFlight));
    }

    #[test]
    fn failed_submission_keeps_contents() {
        let mut form = rated_form(false, 4);
        form.set_content("ok");
        form.prepare().expect("form should be valid");

        form.complete(&Err(ReviewApiError::Rejected {
            status: 400,
            message: Some("duplicate review".to_owned()),
        }));

        assert!(form.is_open());
        assert!(!form.is_submitting());
        assert_eq!(form.content(), "ok");
        assert_eq!(form.ratings().input().overall, 4);
        assert_eq!(
            form.error(),
            Some("Failed to submit review: duplicate review")
        );
    }

    #[test]
    fn successful_submission_resets_form() {
        let mut form = rated_form(true, 4);
        form.set_content("great");
        form.prepare().expect("form should be valid");

        form.complete(&Ok(SubmissionReceipt::default()));

        assert_eq!(form, ReviewForm::new(true));
    }

    #[test]
    fn focus_cycles_through_axes_then_content() {
        let mut form = ReviewForm::new(true);
        form.open();
        let mut seen = vec![form.focus()];

        for _ in 0..4 {
            form.focus_next();
            seen.push(form.focus());
        }

        assert_eq!(
            seen,
            vec![
                FormFocus::Stars(RatingAxis::Overall),
                FormFocus::Stars(RatingAxis::LearningGain),
                FormFocus::Stars(RatingAxis::Workload),
                FormFocus::Stars(RatingAxis::Difficulty),
                FormFocus::Content,
            ]
        );
        form.focus_next();
        assert_eq!(form.focus(), FormFocus::Stars(RatingAxis::Overall));
    }

    #[test]
    fn close_discards_contents() {
        let mut form = rated_form(false, 3);
        form.set_content("draft");

        form.close();

        assert!(!form.is_open());
        assert_eq!(form.content(), "");
        assert_eq!(form.ratings().input().overall, 0);
    }
}
