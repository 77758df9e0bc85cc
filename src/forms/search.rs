use serde::Deserialize;

use crate::routing::parse_page;

/// Search box submission.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchForm {
    pub fn into_query(self) -> String {
        self.query.unwrap_or_default()
    }
}

/// Page control submission.
///
/// `query` is the query the page strip was rendered for. Two tabs on one
/// session share a location, so the form has to say which result set it
/// pages through.
#[derive(Debug, Default, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl PageForm {
    /// Requested page; malformed values select the first page.
    pub fn page(&self) -> usize {
        parse_page(self.page.as_deref())
    }
}
