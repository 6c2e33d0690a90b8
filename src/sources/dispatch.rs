//! Request dispatcher: one logical search at a time, addressed by handle.

use std::fmt;

use super::search::SearchRequest;
use super::transport::Transport;

/// Opaque identity of one dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestHandle(u64);

impl RequestHandle {
    /// Handle with a specific raw id, for transports and tests.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Raw id of this handle.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Builds search requests and hands them to a transport.
///
/// The dispatcher never cancels on its own; superseding a request is the
/// session's decision.
#[derive(Debug)]
pub struct Dispatcher<T> {
    /// Underlying transport.
    transport: T,
    /// Page size sent as `limit`.
    page_size: u64,
    /// Id the next dispatched request gets.
    next_id: u64,
}

impl<T: Transport> Dispatcher<T> {
    /// Dispatcher over `transport` requesting `page_size` items per page.
    pub const fn new(transport: T, page_size: u64) -> Self {
        Self {
            transport,
            page_size,
            next_id: 1,
        }
    }

    /// What: Issue a search for one page of a query.
    ///
    /// Inputs:
    /// - `query`: Free-text query.
    /// - `page`: One-based page.
    ///
    /// Output:
    /// - Handle identifying the request; returned before the request completes.
    pub fn dispatch(&mut self, query: &str, page: u64) -> RequestHandle {
        let handle = RequestHandle(self.next_id);
        self.next_id += 1;
        tracing::debug!(%handle, query, page, "dispatching search");
        self.transport.send(
            handle,
            SearchRequest {
                query: query.to_string(),
                page,
                limit: self.page_size,
            },
        );
        handle
    }

    /// What: Cancel a request.
    ///
    /// Details:
    /// - Never-issued handles are ignored here; completed and already
    ///   cancelled ones are ignored by the transport.
    pub fn cancel(&mut self, handle: RequestHandle) {
        if handle.0 == 0 || handle.0 >= self.next_id {
            return;
        }
        self.transport.cancel(handle);
    }

    /// Underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}
