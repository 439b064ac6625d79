//! Errors raised by local review submission handling.

use thiserror::Error;

use crate::api::error::ReviewApiError;

/// Message shown when a review is submitted without an overall rating.
pub const MISSING_RATING_MESSAGE: &str = "Please select a rating";

/// Errors that stop a review from being submitted or accepted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The overall rating is unset.
    #[error("Please select a rating")]
    MissingRating,

    /// A star value outside 1–5 was selected.
    #[error("rating must be between 1 and 5, got {value}")]
    RatingOutOfRange {
        /// The rejected value.
        value: u8,
    },

    /// A submission is already awaiting a response.
    #[error("a review submission is already in progress")]
    InFlight,

    /// The server or transport rejected the submission.
    #[error(transparent)]
    Api(#[from] ReviewApiError),
}
