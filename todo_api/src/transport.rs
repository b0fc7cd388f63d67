//! HTTP transport boundary used by [`TodoApiClient`](crate::TodoApiClient).
//!
//! A transport performs one GET and hands back the raw status and body. It
//! does not interpret status codes; that is the client's job.

use std::{error::Error as StdError, future::Future, sync::Arc, time::Duration};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// Request timeout applied by [`HttpTransport::new`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

type BoxError = Box<dyn StdError + Send + Sync>;

/// Raw response as delivered by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures raised by a transport before a response could be handed back.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// No response was obtained: DNS, connect, timeout or I/O failure.
    #[error("No response received: {0}")]
    Unreachable(#[source] BoxError),
    /// The request could not be issued at all, or failed in a way that says
    /// nothing about reachability (bad URL, client construction, redirects).
    #[error("Transport failure: {0}")]
    Other(#[source] BoxError),
}

impl TransportError {
    pub fn unreachable(error: impl Into<BoxError>) -> Self {
        Self::Unreachable(error.into())
    }

    pub fn other(error: impl Into<BoxError>) -> Self {
        Self::Other(error.into())
    }
}

/// Capability to issue a GET request.
///
/// Implementations carry their own headers; [`HttpTransport`] asks for JSON.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        (**self).get(url)
    }
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a transport that sends `Accept: application/json` and gives up
    /// after [`REQUEST_TIMEOUT`].
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                TransportError::other(e)
            })?;
        Ok(Self { client })
    }

    /// Wraps an already configured client. Its default headers are used as is.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            tracing::debug!("GET {} failed: {}", url, e);
            to_transport_error(e)
        })?;

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            // The status line already arrived, so the status is what counts.
            Err(e) if !status.is_success() => {
                tracing::debug!("Dropping unreadable body of {} from {}: {}", status, url, e);
                String::new()
            }
            Err(e) => {
                tracing::debug!("Failed to read response body from {}: {}", url, e);
                return Err(to_transport_error(e));
            }
        };

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Builder and redirect errors happen without a usable exchange with the
/// server; everything else reqwest reports is connection level.
fn to_transport_error(e: reqwest::Error) -> TransportError {
    if e.is_builder() || e.is_redirect() {
        TransportError::other(e)
    } else {
        TransportError::unreachable(e)
    }
}
