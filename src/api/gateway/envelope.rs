//! Decoding of the `{success, message, data, pagination}` envelope.

use http::StatusCode;

use crate::api::error::ReviewApiError;
use crate::api::models::ApiEnvelope;

/// Decodes a response body into its envelope.
///
/// A response counts as successful only when the status is 2xx and the
/// envelope reports `success: true`. Any other parseable envelope becomes
/// [`ReviewApiError::Rejected`] carrying the server's message.
pub(super) fn decode_envelope(
    operation: &str,
    status: StatusCode,
    body: &str,
) -> Result<ApiEnvelope, ReviewApiError> {
    match serde_json::from_str::<ApiEnvelope>(body) {
        Ok(envelope) if envelope.success && status.is_success() => Ok(envelope),
        Ok(envelope) => {
            tracing::debug!(
                operation,
                status = status.as_u16(),
                "course API reported failure"
            );
            Err(ReviewApiError::Rejected {
                status: status.as_u16(),
                message: envelope.message,
            })
        }
        Err(error) if status.is_success() => Err(ReviewApiError::Decode {
            message: format!("{operation}: {error}"),
        }),
        Err(_) => Err(ReviewApiError::Rejected {
            status: status.as_u16(),
            message: None,
        }),
    }
}

/// Deserialises the envelope `data` payload into `T`.
pub(super) fn decode_data<T: serde::de::DeserializeOwned>(
    operation: &str,
    envelope: &mut ApiEnvelope,
) -> Result<T, ReviewApiError> {
    let data = envelope.data.take().ok_or_else(|| ReviewApiError::Decode {
        message: format!("{operation}: response has no data"),
    })?;
    serde_json::from_value(data).map_err(|error| ReviewApiError::Decode {
        message: format!("{operation}: {error}"),
    })
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::decode_envelope;
    use crate::api::error::ReviewApiError;

    #[rstest]
    #[case::success_false_on_ok(
        StatusCode::OK,
        r#"{"success": false, "message": "nope"}"#,
        ReviewApiError::Rejected { status: 200, message: Some("nope".to_owned()) }
    )]
    #[case::bad_request_with_reason(
        StatusCode::BAD_REQUEST,
        r#"{"success": false, "message": "You have already reviewed this course"}"#,
        ReviewApiError::Rejected {
            status: 400,
            message: Some("You have already reviewed this course".to_owned()),
        }
    )]
    #[case::server_error_html(
        StatusCode::INTERNAL_SERVER_ERROR,
        "<html>boom</html>",
        ReviewApiError::Rejected { status: 500, message: None }
    )]
    #[case::success_true_on_error_status(
        StatusCode::BAD_GATEWAY,
        r#"{"success": true}"#,
        ReviewApiError::Rejected { status: 502, message: None }
    )]
    fn failures_map_to_rejected(
        #[case] status: StatusCode,
        #[case] body: &str,
        #[case] expected: ReviewApiError,
    ) {
        let result = decode_envelope("test", status, body);

        assert_eq!(result.err(), Some(expected));
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let result = decode_envelope("list reviews", StatusCode::OK, "not json");

        assert!(matches!(result, Err(ReviewApiError::Decode { .. })));
    }

    #[test]
    fn success_envelope_is_returned() {
        let envelope = decode_envelope("test", StatusCode::CREATED, r#"{"success": true}"#)
            .expect("envelope should decode");

        assert!(envelope.success);
        assert!(envelope.data.is_none());
    }
}
