//! Per-browser session state.
//!
//! Each browser gets a random session id in a cookie; the id keys a
//! `ScoreMatrix` that lives only in memory. Unknown ids (e.g. after a
//! restart) start again from the defaults.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use genenet_ranker::ScoreMatrix;
use tracing::{debug, info};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "genenet_session";

/// Sessions untouched for this long are dropped.
const IDLE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

struct Session {
    scores: ScoreMatrix,
    last_seen: Instant,
}

impl Session {
    fn new() -> Self {
        Self { scores: ScoreMatrix::init(), last_seen: Instant::now() }
    }
}

#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session id from the cookie jar, minting a new one if absent or
    /// malformed. The returned jar carries the cookie to set.
    pub fn resolve(&self, jar: CookieJar) -> (CookieJar, Uuid) {
        if let Some(id) = jar
            .get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok())
        {
            return (jar, id);
        }

        let id = Uuid::new_v4();
        debug!(session = %id, "New session");
        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        (jar.add(cookie), id)
    }

    /// Run `f` against the session's scores, creating the session if needed.
    /// Only edits go through here; reads use [`scores`](Self::scores).
    pub fn with_scores<T>(&self, id: Uuid, f: impl FnOnce(&mut ScoreMatrix) -> T) -> T {
        let mut sessions = self.sessions.lock().unwrap_or_else(|p| p.into_inner());
        Self::prune(&mut sessions);
        let session = sessions.entry(id).or_insert_with(Session::new);
        session.last_seen = Instant::now();
        f(&mut session.scores)
    }

    /// Copy of the session's current scores. An id with no edits yet reads
    /// as the defaults and is not stored.
    pub fn scores(&self, id: Uuid) -> ScoreMatrix {
        let mut sessions = self.sessions.lock().unwrap_or_else(|p| p.into_inner());
        match sessions.get_mut(&id) {
            Some(session) => {
                session.last_seen = Instant::now();
                session.scores.clone()
            }
            None => ScoreMatrix::init(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(sessions: &mut HashMap<Uuid, Session>) {
        let before = sessions.len();
        sessions.retain(|_, s| s.last_seen.elapsed() < IDLE_TTL);
        let dropped = before - sessions.len();
        if dropped > 0 {
            info!(dropped, "Expired idle sessions");
        }
    }
}
