//! reqwest implementation of [`SearchTransport`].

use std::sync::Arc;

use reqwest::Client;

use crate::domain::search::SearchResponse;
use crate::transport::{SearchError, SearchFuture, SearchTransport};

pub const DEFAULT_SEARCH_API_URL: &str = "https://help-search-api-prod.herokuapp.com/search";

/// Sends `GET <base_url>?query=<query>` for every search.
#[derive(Clone, Debug)]
pub struct HttpSearchTransport {
    http_client: Client,
    base_url: Arc<str>,
}

impl HttpSearchTransport {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: Arc::from(base_url.into()),
        }
    }

    /// Builds a transport with a default reqwest client.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SearchError> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| SearchError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::new(http_client, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SearchTransport for HttpSearchTransport {
    fn search(&self, query: &str) -> SearchFuture {
        let request = self
            .http_client
            .get(&*self.base_url)
            .query(&[("query", query)]);
        let query = query.to_string();

        Box::pin(async move {
            log::debug!("Sending search request for {query:?}");

            let response = request.send().await.map_err(|e| {
                log::error!("Network error during search request: {e}");
                SearchError::Network(e.to_string())
            })?;

            let status = response.status();
            if !status.is_success() {
                log::error!("Search API responded with {status}");
                return Err(SearchError::Status(status.as_u16()));
            }

            let body = response.text().await.map_err(|e| {
                log::error!("Failed to read search response body: {e}");
                SearchError::Network(e.to_string())
            })?;

            let response = SearchResponse::from_json(&body).map_err(|e| {
                log::error!("Failed to parse search response: {e}");
                SearchError::InvalidResponse(e.to_string())
            })?;

            log::debug!(
                "Search for {query:?} returned {} results",
                response.results.len()
            );

            Ok(response)
        })
    }
}
