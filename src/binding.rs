//! Binds the address bar to a result view.
//!
//! The location is authoritative: [`RouteBinding::submit_query`] and
//! [`RouteBinding::change_page`] only navigate, and result state changes only
//! when the resulting snapshot is consumed by [`RouteBinding::sync`].

use std::sync::Arc;

use crate::routing::{Location, ParamsSubscription, RouteParams};
use crate::transport::SearchTransport;
use crate::view::SearchView;

pub struct RouteBinding {
    location: Location,
    params: ParamsSubscription,
    view: SearchView,
    transport: Arc<dyn SearchTransport>,
    refresh: bool,
}

impl RouteBinding {
    /// Subscribes to `location`. Its current snapshot is the initial one and
    /// is applied by the first [`RouteBinding::sync`].
    pub fn new(location: Location, transport: Arc<dyn SearchTransport>) -> Self {
        let mut params = location.subscribe();
        params.mark_pending();

        Self {
            location,
            params,
            view: SearchView::new(),
            transport,
            refresh: false,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut SearchView {
        &mut self.view
    }

    /// Navigates to `{query, page: 1}`. The next sync searches even if the
    /// query did not change.
    pub fn submit_query(&mut self, query: impl Into<String>) -> RouteParams {
        let params = RouteParams::new(query, 1);
        self.refresh = true;
        self.location.navigate(params.clone());
        params
    }

    /// Navigates to `page`, keeping the query currently in the location.
    pub fn change_page(&mut self, page: usize) -> RouteParams {
        let query = self.location.current().query;
        self.change_page_of(query, page)
    }

    /// Navigates to `page` of the result set for `query`.
    pub fn change_page_of(&mut self, query: impl Into<String>, page: usize) -> RouteParams {
        let params = RouteParams::new(query, page);
        self.location.navigate(params.clone());
        params
    }

    /// Applies the pending snapshot, if any, running its search to
    /// completion. Returns whether a snapshot was applied.
    pub async fn sync(&mut self) -> bool {
        match self.params.try_next() {
            Some(params) => {
                self.apply(params).await;
                true
            }
            None => false,
        }
    }

    async fn apply(&mut self, params: RouteParams) {
        let refresh = std::mem::take(&mut self.refresh);

        let Some(ticket) = self.view.observe(params, refresh) else {
            return;
        };

        let query = self.view.query().to_string();
        let outcome = self.transport.search(&query).await;
        self.view.complete(ticket, outcome);
    }
}
