//! Error taxonomy returned to callers.

use std::{error::Error as StdError, fmt, sync::Arc};

/// Every way a call to the todo service can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response was obtained (DNS, connect, timeout, I/O).
    #[error("Network error")]
    NetworkError,
    /// The requested task does not exist.
    #[error("Item not found")]
    ItemNotFoundError,
    /// The service answered with a non-success status other than not-found.
    #[error("Request failed with status {0}")]
    HttpError(u16),
    /// Anything that fits none of the above. The detail is for diagnostics
    /// only; its shape is unspecified.
    #[error("Unknown error: {0}")]
    UnknownError(#[source] FailureDetail),
}

/// The original failure behind an [`ApiError::UnknownError`].
///
/// Cheap to clone. Two details are equal when they render the same message.
#[derive(Clone)]
pub struct FailureDetail(Arc<dyn StdError + Send + Sync>);

impl FailureDetail {
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl fmt::Debug for FailureDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for FailureDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for FailureDetail {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl PartialEq for FailureDetail {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
