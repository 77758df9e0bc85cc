use serde::Serialize;

use crate::domain::search::ResultItem;
use crate::pagination::Paginated;
use crate::view::{Notification, ViewState};

/// Data required to render the result view template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Query echoed back into the search box.
    pub query: String,
    pub state: ViewState,
    /// Visible page of results with its page strip.
    pub results: Paginated<ResultItem>,
    /// Size of the whole result set.
    pub total_results: usize,
    /// 1-based position of the first visible result.
    pub first_result: usize,
    /// Alerts raised while syncing the view.
    pub alerts: Vec<Notification>,
}
