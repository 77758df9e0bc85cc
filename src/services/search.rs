//! Result view workflows driven by the HTTP handlers.

use crate::binding::RouteBinding;
use crate::dto::search::IndexPageData;
use crate::forms::search::{PageForm, SearchForm};
use crate::pagination::PAGE_SIZE;
use crate::routing::RouteParams;

/// Feeds the address-bar snapshot of the current request into the binding
/// and collects what the result view template needs.
pub async fn load_index_page(binding: &mut RouteBinding, params: RouteParams) -> IndexPageData {
    binding.location().navigate(params);
    binding.sync().await;

    let view = binding.view_mut();
    let alerts = view.take_notifications();
    let first_result = view
        .page()
        .max(1)
        .saturating_sub(1)
        .saturating_mul(PAGE_SIZE)
        .saturating_add(1);

    IndexPageData {
        query: view.query().to_string(),
        state: view.state(),
        results: view.to_paginated(),
        total_results: view.results().len(),
        first_result,
        alerts,
    }
}

/// Handles the search box; returns the snapshot to redirect to.
pub fn submit_search(binding: &mut RouteBinding, form: SearchForm) -> RouteParams {
    let params = binding.submit_query(form.into_query());
    log::info!("Search submitted: {}", params.href());
    params
}

/// Handles a page control; returns the snapshot to redirect to.
///
/// The query rendered into the control wins over the session location, which
/// another tab may have moved since.
pub fn change_page(binding: &mut RouteBinding, form: &PageForm) -> RouteParams {
    match &form.query {
        Some(query) => binding.change_page_of(query.as_str(), form.page()),
        None => binding.change_page(form.page()),
    }
}
