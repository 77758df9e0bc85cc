//! URL parameter state: the `{query, page}` snapshot and the observable
//! address bar it lives in.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// The only real route. Every other path is redirected here.
pub const INDEX_PATH: &str = "/";

/// Snapshot of the two URL parameters the result view depends on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteParams {
    pub query: String,
    pub page: usize,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

/// Raw parameters as they appear in the address bar.
#[derive(Deserialize, Default)]
struct RawRouteParams {
    query: Option<String>,
    page: Option<String>,
}

/// Parses a page parameter; missing, non-numeric or zero values become `1`.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

impl RouteParams {
    pub fn new(query: impl Into<String>, page: usize) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
        }
    }

    /// Reads the snapshot from a raw query string (without the leading `?`).
    ///
    /// Unknown keys are ignored and a malformed string reads as the defaults.
    pub fn from_query_string(query_string: &str) -> Self {
        let raw: RawRouteParams = match serde_html_form::from_str(query_string) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Ignoring malformed query string {query_string:?}: {err}");
                RawRouteParams::default()
            }
        };

        Self {
            query: raw.query.unwrap_or_default(),
            page: parse_page(raw.page.as_deref()),
        }
    }

    pub fn to_query_string(&self) -> String {
        let page = self.page.to_string();
        serde_html_form::to_string([("query", self.query.as_str()), ("page", page.as_str())])
            .unwrap_or_default()
    }

    /// Location of the result view for this snapshot.
    pub fn href(&self) -> String {
        format!("{INDEX_PATH}?{}", self.to_query_string())
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Observable address-bar state.
///
/// Cloning shares the same underlying state; every clone sees the same
/// navigations.
#[derive(Clone, Debug)]
pub struct Location {
    tx: Arc<watch::Sender<RouteParams>>,
}

impl Default for Location {
    fn default() -> Self {
        Self::new(RouteParams::default())
    }
}

impl Location {
    pub fn new(initial: RouteParams) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> RouteParams {
        self.tx.borrow().clone()
    }

    /// Replaces the current snapshot and wakes every subscription, even when
    /// the new snapshot equals the old one.
    pub fn navigate(&self, params: RouteParams) {
        log::debug!("Navigating to {}", params.href());
        self.tx.send_replace(params);
    }

    pub fn subscribe(&self) -> ParamsSubscription {
        ParamsSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn observers(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Unbounded sequence of snapshots produced by a [`Location`].
///
/// Only the latest snapshot is kept: several navigations between two reads
/// collapse into one. Dropping the subscription detaches it.
#[derive(Debug)]
pub struct ParamsSubscription {
    rx: watch::Receiver<RouteParams>,
}

impl ParamsSubscription {
    /// Marks the current snapshot as unread.
    pub fn mark_pending(&mut self) {
        self.rx.mark_changed();
    }

    /// Returns the snapshot navigated to since the last read, if any.
    pub fn try_next(&mut self) -> Option<RouteParams> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Waits for the next navigation. Yields `None` once every [`Location`]
    /// handle is gone.
    pub async fn next(&mut self) -> Option<RouteParams> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
