//! Signed-in identity for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`SessionStore`] via context. Login and register replace
//! the session, logout clears it, and every page reads it. The record is
//! persisted to `localStorage` so it survives reloads.
//!
//! The store starts unrestored: server rendering has no storage, so the
//! persisted session is read after hydration. Route guards and mount fetches
//! wait for `restored` before acting on an absent session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Id, Session, UserType};
use crate::util::storage;

/// `localStorage` key holding the serialized [`Session`].
pub const SESSION_STORAGE_KEY: &str = "user";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub restored: bool,
}

impl SessionState {
    pub fn user_type(&self) -> Option<UserType> {
        self.session.as_ref().map(|s| s.user_type)
    }

    pub fn customer_id(&self) -> Option<Id> {
        self.session.as_ref().and_then(Session::customer_id)
    }

    pub fn distributor_id(&self) -> Option<Id> {
        self.session.as_ref().and_then(Session::distributor_id)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.name.as_str())
    }
}

/// Reactive handle over [`SessionState`]. `Copy`, so closures take it freely.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Read the session persisted by a previous visit.
    pub fn restore(self) {
        let session = storage::load_json::<Session>(SESSION_STORAGE_KEY);
        self.state.set(SessionState { session, restored: true });
    }

    /// Tracked read.
    pub fn get(self) -> SessionState {
        self.state.get()
    }

    pub fn get_untracked(self) -> SessionState {
        self.state.get_untracked()
    }

    /// Swap in a new identity and persist it.
    pub fn replace(self, session: Session) {
        storage::save_json(SESSION_STORAGE_KEY, &session);
        self.state.set(SessionState { session: Some(session), restored: true });
    }

    /// Forget the identity locally and in storage.
    pub fn clear(self) {
        storage::remove(SESSION_STORAGE_KEY);
        self.state.set(SessionState { session: None, restored: true });
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
