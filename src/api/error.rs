//! Error types exposed by the course API layer.

use thiserror::Error;

/// Generic reason shown when the server did not supply one.
pub const GENERIC_FAILURE_MESSAGE: &str = "please try again later";

/// Errors surfaced while building requests or talking to the course API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewApiError {
    /// The course identifier was zero or not a number.
    #[error("course id must be a positive integer")]
    InvalidCourseId,

    /// The API base URL could not be parsed or extended.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed before a response arrived.
    #[error("network error talking to the course API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The server answered with a non-2xx status or `success: false`.
    #[error(
        "course API rejected the request (status {status}): {}",
        .message.as_deref().unwrap_or("no reason given")
    )]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// User-displayable reason from the response envelope, if any.
        message: Option<String>,
    },

    /// A 2xx response body was not a valid envelope.
    #[error("course API response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ReviewApiError {
    /// Returns the message to show a user for this failure.
    ///
    /// Server-reported reasons are passed through verbatim; every other
    /// failure collapses to [`GENERIC_FAILURE_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.as_str(),
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}
