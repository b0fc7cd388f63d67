//! Maps raised failures onto the [`ApiError`] taxonomy.
//!
//! [`classify`] is the only place that decides which `ApiError` a failed call
//! turns into.

use crate::{
    errors::{ApiError, FailureDetail},
    transport::TransportError,
};

/// The endpoint a call was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /todos`
    AllTasks,
    /// `GET /todos/{id}`
    TaskById,
}

/// Everything that can go wrong between issuing a request and holding a
/// decoded payload.
#[derive(thiserror::Error, Debug)]
pub enum CallError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The service answered, but not with a success status.
    #[error("Request failed with status {status}")]
    Status { status: u16, body: String },
    /// A success response whose body did not decode.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Turns a failed call into exactly one [`ApiError`]. First match wins:
///
/// 1. no response obtained → `NetworkError`
/// 2. non-success status → `ItemNotFoundError` for a 404 on
///    [`Endpoint::TaskById`], `HttpError(status)` otherwise
/// 3. anything else → `UnknownError` carrying the failure
pub fn classify(error: CallError, endpoint: Endpoint) -> ApiError {
    match error {
        CallError::Transport(TransportError::Unreachable(ref e)) => {
            tracing::warn!("Network error calling {:?}: {}", endpoint, e);
            ApiError::NetworkError
        }
        CallError::Status { status, ref body } if !(200..300).contains(&status) => {
            tracing::warn!(
                "Request to {:?} failed with status {}: {}",
                endpoint,
                status,
                truncate_body(body)
            );
            if status == 404 && endpoint == Endpoint::TaskById {
                ApiError::ItemNotFoundError
            } else {
                ApiError::HttpError(status)
            }
        }
        other => {
            tracing::error!("Unclassified failure calling {:?}: {}", endpoint, other);
            ApiError::UnknownError(FailureDetail::new(other))
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> CallError {
        CallError::Status {
            status: code,
            body: String::new(),
        }
    }

    fn decode_error() -> CallError {
        serde_json::from_str::<crate::Task>("{not valid json}")
            .unwrap_err()
            .into()
    }

    #[test]
    fn unreachable_is_network_error_on_both_endpoints() {
        for endpoint in [Endpoint::AllTasks, Endpoint::TaskById] {
            let err = TransportError::unreachable("connection refused").into();
            assert_eq!(classify(err, endpoint), ApiError::NetworkError);
        }
    }

    #[test]
    fn not_found_on_single_item_is_item_not_found() {
        assert_eq!(
            classify(status(404), Endpoint::TaskById),
            ApiError::ItemNotFoundError
        );
    }

    #[test]
    fn not_found_on_collection_stays_http_error() {
        assert_eq!(
            classify(status(404), Endpoint::AllTasks),
            ApiError::HttpError(404)
        );
    }

    #[test]
    fn other_statuses_are_http_errors() {
        for code in [301, 400, 401, 403, 418, 500, 502, 503] {
            assert_eq!(
                classify(status(code), Endpoint::TaskById),
                ApiError::HttpError(code)
            );
            assert_eq!(
                classify(status(code), Endpoint::AllTasks),
                ApiError::HttpError(code)
            );
        }
    }

    #[test]
    fn decode_failure_is_unknown() {
        let api_error = classify(decode_error(), Endpoint::AllTasks);
        match api_error {
            ApiError::UnknownError(detail) => {
                assert!(detail.to_string().starts_with("Failed to decode response body"));
                assert!(detail.get_ref().downcast_ref::<CallError>().is_some());
            }
            other => panic!("expected UnknownError, got {other:?}"),
        }
    }

    #[test]
    fn other_transport_failure_is_unknown() {
        let err = TransportError::other("relative URL without a base").into();
        assert!(matches!(
            classify(err, Endpoint::TaskById),
            ApiError::UnknownError(_)
        ));
    }

    #[test]
    fn success_status_is_not_an_http_error() {
        assert!(matches!(
            classify(status(200), Endpoint::TaskById),
            ApiError::UnknownError(_)
        ));
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                classify(status(500), Endpoint::AllTasks),
                ApiError::HttpError(500)
            );
            assert_eq!(
                classify(decode_error(), Endpoint::TaskById),
                classify(decode_error(), Endpoint::TaskById)
            );
        }
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "x".repeat(2500);
        let snippet = truncate_body(&body);
        assert_eq!(snippet.len(), 2000 + "...[truncated]".len());
        assert!(snippet.ends_with("...[truncated]"));

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = format!("{}é", "a".repeat(1999));
        let snippet = truncate_body(&body);
        assert!(snippet.starts_with(&"a".repeat(1999)));
        assert!(snippet.ends_with("...[truncated]"));
    }
}
