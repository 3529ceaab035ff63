//! In-process session registry.
//!
//! The engine assumes one writer at a time per session. This registry is the
//! collaborator that provides it: every session sits behind its own mutex,
//! so concurrent callers (e.g. two players bidding at once through an HTTP
//! handler) are serialized per session while different sessions proceed in
//! parallel.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use ulid::Ulid;

use crate::config::GameRules;
use crate::domain::session::GameSession;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Ulid);

impl SessionId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("session {0} not found")]
    UnknownSession(SessionId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Arc<Mutex<GameSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session with the standard rules.
    pub fn create(&self) -> SessionId {
        self.insert(GameSession::new())
    }

    pub fn create_with(&self, rules: GameRules) -> Result<SessionId, RegistryError> {
        let session = GameSession::with_rules(rules)?;
        Ok(self.insert(session))
    }

    fn insert(&self, session: GameSession) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, Arc::new(Mutex::new(session)));
        info!(session_id = %id, "session created");
        id
    }

    /// Run `f` with exclusive access to one session.
    ///
    /// The registry map is not locked while `f` runs, only the session.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> Result<T, DomainError>,
    ) -> Result<T, RegistryError> {
        let handle = self
            .sessions
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(RegistryError::UnknownSession(id))?;

        let mut session = handle.lock();
        let before = session.current_phase();
        let result = f(&mut *session);
        let after = session.current_phase();
        if before != after {
            info!(session_id = %id, from = %before, to = %after, "session phase changed");
        }
        result.map_err(|err| {
            debug!(session_id = %id, code = %err.code(), "session call rejected");
            RegistryError::Domain(err)
        })
    }

    pub fn remove(&self, id: SessionId) -> Result<GameSession, RegistryError> {
        let (_, handle) = self
            .sessions
            .remove(&id)
            .ok_or(RegistryError::UnknownSession(id))?;
        info!(session_id = %id, "session removed");
        let session = handle.lock().clone();
        Ok(session)
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.iter().map(|entry| *entry.key()).collect();
        ids.sort();
        ids
    }
}
