//! Outbound search calls.
//!
//! The result view only depends on [`SearchTransport`]; the reqwest-backed
//! implementation lives in [`http`] and is compiled with the `server` feature.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::domain::search::SearchResponse;

#[cfg(feature = "server")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Failure of a single search request. No variant is retried.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Network(String),

    #[error("search request failed with HTTP status {0}")]
    Status(u16),

    #[error("search response could not be decoded: {0}")]
    InvalidResponse(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// Future returned by [`SearchTransport::search`].
pub type SearchFuture = Pin<Box<dyn Future<Output = SearchResult<SearchResponse>> + Send>>;

/// Performs a keyed asynchronous text-query lookup.
///
/// Every call is independent: implementations must not cache, retry or
/// deduplicate requests.
pub trait SearchTransport: Send + Sync {
    fn search(&self, query: &str) -> SearchFuture;
}
