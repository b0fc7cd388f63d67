//! HTTP client for the todo service.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    classify::{classify, CallError, Endpoint},
    errors::ApiError,
    outcome::Outcome,
    transport::{HttpTransport, Transport, TransportError},
    types::Task,
};

/// Root of the public todo service.
pub const BASE_ENDPOINT: &str = "http://jsonplaceholder.typicode.com";

/// Read-only client for the todo service.
///
/// Holds one transport for its whole lifetime and no other state, so a single
/// instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct TodoApiClient<T = HttpTransport> {
    transport: T,
    /// Service root without a trailing slash.
    base_url: String,
}

impl TodoApiClient<HttpTransport> {
    /// Creates a client for [`BASE_ENDPOINT`] with the default JSON transport.
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new()?))
    }

    /// Creates a client with the default transport against a custom service
    /// root. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, TransportError> {
        Self::with_transport_and_base_url(HttpTransport::new()?, base_url)
    }
}

impl<T: Transport> TodoApiClient<T> {
    /// Creates a client for [`BASE_ENDPOINT`] on top of an already configured
    /// transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base_url: BASE_ENDPOINT.to_string(),
        }
    }

    /// Creates a client on top of an already configured transport against a
    /// custom service root.
    pub fn with_transport_and_base_url(transport: T, base_url: &str) -> Result<Self, TransportError> {
        Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            TransportError::other(e)
        })?;
        Ok(Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Service root every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every task, in the order the service returns them.
    pub async fn get_all_tasks(&self) -> Outcome<ApiError, Vec<Task>> {
        let url = format!("{}/todos", self.base_url);
        self.fetch(Endpoint::AllTasks, &url).await
    }

    /// Fetches a single task. `id` is appended to the path as given.
    ///
    /// A 404 from the service yields [`ApiError::ItemNotFoundError`].
    pub async fn get_tasks_by_id(&self, id: &str) -> Outcome<ApiError, Task> {
        let url = format!("{}/todos/{}", self.base_url, id);
        self.fetch(Endpoint::TaskById, &url).await
    }

    async fn fetch<D>(&self, endpoint: Endpoint, url: &str) -> Outcome<ApiError, D>
    where
        D: DeserializeOwned,
    {
        match self.try_fetch(url).await {
            Ok(payload) => Outcome::success(payload),
            Err(e) => Outcome::failure(classify(e, endpoint)),
        }
    }

    async fn try_fetch<D>(&self, url: &str) -> Result<D, CallError>
    where
        D: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);
        let resp = self.transport.get(url).await?;

        if !resp.is_success() {
            return Err(CallError::Status {
                status: resp.status,
                body: resp.body,
            });
        }

        Ok(serde_json::from_str::<D>(&resp.body)?)
    }
}
