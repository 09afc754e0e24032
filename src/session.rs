use axum::http::{header, HeaderMap};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::view::{reduce, Action, ViewState};

pub const SESSION_COOKIE: &str = "rigorcheck_session";

#[derive(Clone, Debug)]
pub struct Session {
    pub view: ViewState,
    pub last_seen: DateTime<Utc>,
}

/// One [`ViewState`] per browser, keyed by the session cookie.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the caller's session id, minting one if the cookie is absent,
    /// malformed or refers to an evicted session. The flag is true when a
    /// cookie needs to be set. Any visit counts as activity.
    pub fn resolve(&self, headers: &HeaderMap) -> (Uuid, bool) {
        let known = session_id_from(headers).filter(|id| match self.sessions.get_mut(id) {
            Some(mut session) => {
                session.last_seen = Utc::now();
                true
            }
            None => false,
        });
        match known {
            Some(id) => (id, false),
            None => {
                let id = Uuid::new_v4();
                self.sessions.insert(
                    id,
                    Session {
                        view: ViewState::default(),
                        last_seen: Utc::now(),
                    },
                );
                (id, true)
            }
        }
    }

    pub fn view(&self, id: &Uuid) -> ViewState {
        self.sessions
            .get(id)
            .map(|s| s.view.clone())
            .unwrap_or_default()
    }

    /// Applies `action` to the session's view and returns the new view. The
    /// entry stays locked for the transition, so request ids handed out by
    /// concurrent submissions never collide.
    pub fn dispatch(&self, id: Uuid, action: Action) -> ViewState {
        let mut entry = self.sessions.entry(id).or_insert_with(|| Session {
            view: ViewState::default(),
            last_seen: Utc::now(),
        });
        let next = reduce(&entry.view, action);
        entry.view = next;
        entry.last_seen = Utc::now();
        entry.view.clone()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drops sessions idle for longer than `max_idle`, unless a request is
    /// still outstanding for them.
    pub fn evict_idle(&self, max_idle: Duration) {
        let Some(cutoff) = chrono::Duration::from_std(max_idle)
            .ok()
            .and_then(|d| Utc::now().checked_sub_signed(d))
        else {
            return;
        };
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.last_seen > cutoff || session.view.is_loading());
        let removed = before - self.sessions.len();
        if removed > 0 {
            info!("[rigorcheck] Evicted {} idle sessions", removed);
        }
    }
}

pub fn session_id_from(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(id: &Uuid) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}
