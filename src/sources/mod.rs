//! Remote catalog access split into submodules.
//!
//! `search` knows the Finna API shape, `transport` moves requests over the
//! network and `dispatch` hands out request handles.

pub mod dispatch;
pub mod search;
pub mod transport;

pub use dispatch::{Dispatcher, RequestHandle};
pub use search::{SearchRequest, SearchResponse, catalog_item, parse_search_response};
pub use transport::{HttpTransport, Transport, TransportEvent};
