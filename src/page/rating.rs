//! Star rating capture for the review form.
//!
//! Hovering previews a value without committing it; selecting commits it.
//! Only the overall rating gates submission; the sub-rating axes are
//! optional and only sent when detailed ratings are enabled.

use super::error::SubmissionError;
use crate::api::models::{DetailedRatings, MAX_RATING};

/// Prompt shown while the overall rating is unset.
pub const RATING_PROMPT: &str = "Click a star to rate";

/// Colour of previewed (hovered) stars.
pub const PREVIEW_COLOUR: &str = "#ffc107";

/// Colour of committed stars.
pub const COMMITTED_COLOUR: &str = "#007bff";

/// Colour of empty stars.
pub const EMPTY_COLOUR: &str = "#dee2e6";

/// A rateable dimension of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingAxis {
    /// Overall rating; required.
    Overall,
    /// How much the reviewer learned.
    LearningGain,
    /// How heavy the workload was.
    Workload,
    /// How hard the course was.
    Difficulty,
}

impl RatingAxis {
    /// Optional sub-rating axes, in form order.
    pub const DETAILED: [Self; 3] = [Self::LearningGain, Self::Workload, Self::Difficulty];

    /// Field name used in request bodies.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Overall => "rating",
            Self::LearningGain => "learning_gain",
            Self::Workload => "workload",
            Self::Difficulty => "difficulty",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::LearningGain => "Learning gain",
            Self::Workload => "Workload",
            Self::Difficulty => "Difficulty",
        }
    }
}

/// Committed rating values. `overall` of 0 means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingInput {
    /// Overall rating, 0 when unset.
    pub overall: u8,
    /// Learning-gain rating.
    pub learning_gain: Option<u8>,
    /// Workload rating.
    pub workload: Option<u8>,
    /// Difficulty rating.
    pub difficulty: Option<u8>,
}

impl RatingInput {
    /// Committed value for `axis`, 0 when unset.
    #[must_use]
    pub const fn value(&self, axis: RatingAxis) -> u8 {
        match axis {
            RatingAxis::Overall => self.overall,
            RatingAxis::LearningGain => unwrap_or_zero(self.learning_gain),
            RatingAxis::Workload => unwrap_or_zero(self.workload),
            RatingAxis::Difficulty => unwrap_or_zero(self.difficulty),
        }
    }

    /// Returns the sub-ratings as sent to the server.
    #[must_use]
    pub const fn detailed(&self) -> DetailedRatings {
        DetailedRatings {
            learning_gain: self.learning_gain,
            workload: self.workload,
            difficulty: self.difficulty,
        }
    }

    const fn set(&mut self, axis: RatingAxis, value: u8) {
        match axis {
            RatingAxis::Overall => self.overall = value,
            RatingAxis::LearningGain => self.learning_gain = Some(value),
            RatingAxis::Workload => self.workload = Some(value),
            RatingAxis::Difficulty => self.difficulty = Some(value),
        }
    }
}

const fn unwrap_or_zero(value: Option<u8>) -> u8 {
    match value {
        Some(inner) => inner,
        None => 0,
    }
}

/// How a row of stars should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarTone {
    /// Hover preview.
    Preview,
    /// Committed value.
    Committed,
    /// Nothing selected.
    Empty,
}

impl StarTone {
    /// CSS-style colour for filled stars in this tone.
    #[must_use]
    pub const fn colour(self) -> &'static str {
        match self {
            Self::Preview => PREVIEW_COLOUR,
            Self::Committed => COMMITTED_COLOUR,
            Self::Empty => EMPTY_COLOUR,
        }
    }
}

/// Render instruction for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRow {
    /// Number of filled stars (0–5).
    pub filled: u8,
    /// Tone of the filled stars.
    pub tone: StarTone,
}

/// Rating capture state: committed values plus at most one hover preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingCapture {
    committed: RatingInput,
    preview: Option<(RatingAxis, u8)>,
}

impl RatingCapture {
    /// Committed values.
    #[must_use]
    pub const fn input(&self) -> &RatingInput {
        &self.committed
    }

    /// Previews `value` on `axis` without committing it.
    ///
    /// Values outside 1–5 clear the preview.
    pub fn hover(&mut self, axis: RatingAxis, value: u8) {
        self.preview = is_valid_rating(value).then_some((axis, value));
    }

    /// Ends a preview on `axis`, reverting to the committed value.
    pub fn leave(&mut self, axis: RatingAxis) {
        if self.preview.is_some_and(|(previewed, _)| previewed == axis) {
            self.preview = None;
        }
    }

    /// Commits `value` on `axis`. Selecting the same value twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::RatingOutOfRange`] when `value` is not 1–5.
    pub fn select(&mut self, axis: RatingAxis, value: u8) -> Result<(), SubmissionError> {
        if !is_valid_rating(value) {
            return Err(SubmissionError::RatingOutOfRange { value });
        }
        self.committed.set(axis, value);
        self.leave(axis);
        Ok(())
    }

    /// Clears every committed value and any preview.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current preview, if any.
    #[must_use]
    pub const fn preview(&self) -> Option<(RatingAxis, u8)> {
        self.preview
    }

    /// How the stars for `axis` should be drawn right now.
    #[must_use]
    pub fn star_row(&self, axis: RatingAxis) -> StarRow {
        if let Some((previewed, value)) = self.preview
            && previewed == axis
        {
            return StarRow {
                filled: value,
                tone: StarTone::Preview,
            };
        }
        match self.committed.value(axis) {
            0 => StarRow {
                filled: 0,
                tone: StarTone::Empty,
            },
            value => StarRow {
                filled: value,
                tone: StarTone::Committed,
            },
        }
    }

    /// Text shown next to the overall stars: the previewed or committed
    /// value's label, or [`RATING_PROMPT`] when unset.
    #[must_use]
    pub fn overall_caption(&self) -> &'static str {
        let shown = match self.preview {
            Some((RatingAxis::Overall, value)) => value,
            _ => self.committed.overall,
        };
        rating_label(shown).unwrap_or(RATING_PROMPT)
    }
}

fn is_valid_rating(value: u8) -> bool {
    (1..=MAX_RATING).contains(&value)
}

/// Descriptive label for a 1–5 rating.
#[must_use]
pub const fn rating_label(value: u8) -> Option<&'static str> {
    match value {
        1 => Some("Poor - not recommended"),
        2 => Some("Fair - needs improvement"),
        3 => Some("Average - acceptable"),
        4 => Some("Good - worth recommending"),
        5 => Some("Excellent - highly recommended"),
        _ => None,
    }
}
