//! Result view state: the current query, its results and the visible page.

use serde::Serialize;

use crate::domain::search::{ResultItem, SearchResponse};
use crate::pagination::{PAGE_SIZE, Paginated, page_slice, total_pages};
use crate::routing::RouteParams;
use crate::transport::SearchResult;

/// The two observable states of the result view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// No query; nothing loaded.
    Idle,
    /// Results are held for a query. The set may be empty.
    Loaded,
}

/// Identifies one issued search. Only the most recent ticket is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Blocking error shown to the user; the page stays unusable until it is
/// acknowledged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug)]
struct PendingSearch {
    ticket: SearchTicket,
    query: String,
}

/// State owned by one result view.
#[derive(Debug)]
pub struct SearchView {
    query: String,
    page: usize,
    results: Vec<ResultItem>,
    paginated: Vec<ResultItem>,
    loaded_query: Option<String>,
    pending: Option<PendingSearch>,
    last_ticket: u64,
    notifications: Vec<Notification>,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            paginated: Vec::new(),
            loaded_query: None,
            pending: None,
            last_ticket: 0,
            notifications: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn state(&self) -> ViewState {
        if self.loaded_query.is_some() {
            ViewState::Loaded
        } else {
            ViewState::Idle
        }
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// Results visible on the current page.
    pub fn paginated(&self) -> &[ResultItem] {
        &self.paginated
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.results.len(), PAGE_SIZE)
    }

    /// Query the held results belong to.
    pub fn loaded_query(&self) -> Option<&str> {
        self.loaded_query.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies a URL snapshot.
    ///
    /// Returns a ticket when a search has to be issued for the snapshot's
    /// query; the caller runs the search and hands the outcome to
    /// [`SearchView::complete`]. `refresh` forces a search even if results
    /// for the same query are already held.
    pub fn observe(&mut self, params: RouteParams, refresh: bool) -> Option<SearchTicket> {
        self.query = params.query;
        self.page = params.page.max(1);

        if self.query.is_empty() {
            self.reset();
            return None;
        }

        self.update_pagination();

        if !refresh && self.loaded_query.as_deref() == Some(self.query.as_str()) {
            return None;
        }

        Some(self.begin_search())
    }

    /// Issues a ticket for the current query, superseding any in-flight one.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.last_ticket += 1;
        let ticket = SearchTicket(self.last_ticket);
        self.pending = Some(PendingSearch {
            ticket,
            query: self.query.clone(),
        });
        ticket
    }

    /// Applies the outcome of a search. Returns `false` when the ticket is
    /// stale and the outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: SearchResult<SearchResponse>,
    ) -> bool {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                self.pending = other;
                log::debug!("Discarding stale search response {ticket:?}");
                return false;
            }
        };

        match outcome {
            Ok(response) => {
                log::info!(
                    "Loaded {} results for {:?}",
                    response.results.len(),
                    pending.query
                );
                self.results = response.results;
                self.loaded_query = Some(pending.query);
                self.update_pagination();
            }
            Err(err) => {
                log::error!("Error occurred while searching: {err}");
                self.notifications
                    .push(Notification::error("Error occurred while searching."));
            }
        }
        true
    }

    /// Drains queued notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Current page in the shape the templates render.
    pub fn to_paginated(&self) -> Paginated<ResultItem> {
        Paginated::new(self.paginated.clone(), self.page, self.total_pages())
    }

    fn update_pagination(&mut self) {
        self.paginated = page_slice(&self.results, self.page, PAGE_SIZE).to_vec();
    }

    fn reset(&mut self) {
        self.results.clear();
        self.paginated.clear();
        self.loaded_query = None;
        self.pending = None;
    }
}
