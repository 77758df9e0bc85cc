//! Shared helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use serde_json::json;

use help_search::domain::search::{ResultItem, SearchResponse};
use help_search::transport::{SearchError, SearchFuture, SearchTransport};

/// Transport answering every query with a fixed number of results, or with a
/// failure once `fail` is set. Records each query it receives.
#[derive(Default)]
pub struct FakeTransport {
    pub result_count: usize,
    fail: AtomicBool,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn with_results(result_count: usize) -> Arc<Self> {
        Arc::new(Self {
            result_count,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl SearchTransport for FakeTransport {
    fn search(&self, query: &str) -> SearchFuture {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().push(query.to_string());

        if self.fail.load(Ordering::SeqCst) {
            return Box::pin(async { Err(SearchError::Status(500)) });
        }

        let results = (0..self.result_count)
            .map(|i| {
                ResultItem::new(json!({
                    "title": format!("Result {i}"),
                    "url": format!("https://help.example.com/{i}"),
                }))
            })
            .collect();
        Box::pin(async move { Ok(SearchResponse::new(results)) })
    }
}
