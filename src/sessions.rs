//! One route binding per browser session.

use std::collections::HashMap;
use std::sync::Arc;

use actix_session::Session;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::binding::RouteBinding;
use crate::routing::Location;
use crate::transport::SearchTransport;

/// Session key holding the browser's view id.
pub const SESSION_VIEW_KEY: &str = "view_id";

pub type SharedBinding = Arc<tokio::sync::Mutex<RouteBinding>>;

struct SessionEntry {
    binding: SharedBinding,
    last_seen: u64,
}

#[derive(Default)]
struct SessionTable {
    entries: HashMap<Uuid, SessionEntry>,
    clock: u64,
}

/// Owns the result views of all tracked sessions.
///
/// When more than `capacity` sessions are tracked the least recently seen
/// one is dropped, which tears its binding down.
pub struct SessionRegistry {
    transport: Arc<dyn SearchTransport>,
    sessions: Mutex<SessionTable>,
    capacity: usize,
}

impl SessionRegistry {
    pub fn new(transport: Arc<dyn SearchTransport>, capacity: usize) -> Self {
        Self {
            transport,
            sessions: Mutex::new(SessionTable::default()),
            capacity: capacity.max(1),
        }
    }

    /// Returns the binding for `id`, creating it on first use.
    pub fn binding(&self, id: Uuid) -> SharedBinding {
        let mut table = self.sessions.lock();
        table.clock += 1;
        let now = table.clock;
        let sessions = &mut table.entries;

        if let Some(entry) = sessions.get_mut(&id) {
            entry.last_seen = now;
            return entry.binding.clone();
        }

        if sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                log::info!("Evicting search session {oldest}");
                sessions.remove(&oldest);
            }
        }

        log::debug!("Creating search session {id}");
        let binding = Arc::new(tokio::sync::Mutex::new(RouteBinding::new(
            Location::default(),
            self.transport.clone(),
        )));
        sessions.insert(
            id,
            SessionEntry {
                binding: binding.clone(),
                last_seen: now,
            },
        );
        binding
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().entries.is_empty()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.sessions.lock().entries.contains_key(id)
    }
}

/// Reads the view id from the session cookie, assigning a fresh one when it
/// is missing or unreadable.
pub fn session_view_id(session: &Session) -> Uuid {
    match session.get::<Uuid>(SESSION_VIEW_KEY) {
        Ok(Some(id)) => return id,
        Ok(None) => {}
        Err(err) => log::warn!("Failed to read view id from session: {err}"),
    }

    let id = Uuid::new_v4();
    if let Err(err) = session.insert(SESSION_VIEW_KEY, id) {
        log::error!("Failed to store view id in session: {err}");
    }
    id
}
