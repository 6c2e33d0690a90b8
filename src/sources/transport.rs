//! Transport seam between the dispatcher and the network.
//!
//! A transport starts one request per handle and reports its completion as a
//! [`TransportEvent`] on a channel owned by the session's event loop. It never
//! decides whether a result is still wanted; that identity check belongs to
//! the session.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::dispatch::RequestHandle;
use super::search::{SEARCH_ENDPOINT, SearchRequest, SearchResponse, parse_search_response};
use crate::error::TransportError;

/// Completion of one request.
#[derive(Debug)]
pub struct TransportEvent {
    /// Handle the request was issued under.
    pub handle: RequestHandle,
    /// Decoded response or failure.
    pub outcome: Result<SearchResponse, TransportError>,
}

/// Mechanism that carries search requests to the API.
pub trait Transport {
    /// What: Start a request without waiting for it.
    ///
    /// Inputs:
    /// - `handle`: Identity the completion will be reported under.
    /// - `request`: Parameters of the search.
    ///
    /// Details:
    /// - Completion, success or failure, is reported asynchronously.
    fn send(&mut self, handle: RequestHandle, request: SearchRequest);

    /// What: Stop caring about a request.
    ///
    /// Details:
    /// - Must be a no-op for unknown, completed or already cancelled handles.
    /// - Best effort: a completion may still be reported afterwards.
    fn cancel(&mut self, handle: RequestHandle);
}

/// HTTP transport over a pooled `reqwest` client.
pub struct HttpTransport {
    /// Shared client with connect and total timeouts.
    client: reqwest::Client,
    /// Absolute search endpoint URL.
    endpoint: String,
    /// Completion channel.
    events: mpsc::UnboundedSender<TransportEvent>,
    /// Running request tasks by handle.
    in_flight: HashMap<RequestHandle, JoinHandle<()>>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .field("in_flight", &self.in_flight.len())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// What: Create a transport for an API base URL.
    ///
    /// Inputs:
    /// - `api_base_url`: API root such as `https://api.finna.fi`.
    /// - `events`: Channel receiving completions.
    ///
    /// Output:
    /// - The transport, or the client construction error.
    ///
    /// # Errors
    /// - `TransportError::Request` when the HTTP client cannot be built (TLS backend failure).
    pub fn new(
        api_base_url: &str,
        events: mpsc::UnboundedSender<TransportEvent>,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .user_agent(format!("finnapick/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}{SEARCH_ENDPOINT}", api_base_url.trim_end_matches('/')),
            events,
            in_flight: HashMap::new(),
        })
    }

    /// Number of requests whose tasks are still running.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.values().filter(|t| !t.is_finished()).count()
    }
}

/// What: Run one search request to completion.
///
/// Output:
/// - Decoded response, or the transport failure.
async fn fetch(
    client: &reqwest::Client,
    endpoint: &str,
    request: &SearchRequest,
) -> Result<SearchResponse, TransportError> {
    let response = client
        .get(endpoint)
        .query(&request.query_pairs())
        .send()
        .await?
        .error_for_status()?;
    let body: serde_json::Value = response.json().await?;
    parse_search_response(&body)
}

impl Transport for HttpTransport {
    fn send(&mut self, handle: RequestHandle, request: SearchRequest) {
        self.in_flight.retain(|_, task| !task.is_finished());
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let outcome = fetch(&client, &endpoint, &request).await;
            if let Err(e) = &outcome {
                tracing::warn!(%handle, error = %e, "search request failed");
            }
            // The receiver is gone once the picker has shut down.
            let _ = events.send(TransportEvent { handle, outcome });
        });
        self.in_flight.insert(handle, task);
    }

    fn cancel(&mut self, handle: RequestHandle) {
        if let Some(task) = self.in_flight.remove(&handle) {
            task.abort();
            tracing::debug!(%handle, "search request aborted");
        }
    }
}
