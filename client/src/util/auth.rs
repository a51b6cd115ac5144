//! Shared role-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Customer-only and distributor-only routes apply identical redirect
//! behavior once the persisted session has been restored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::UserType;
use crate::state::session::{SessionState, SessionStore};

/// Whether a page requiring `required` should send this visitor to `/login`.
pub fn should_redirect(state: &SessionState, required: UserType) -> bool {
    state.restored && state.user_type() != Some(required)
}

/// Redirect to `/login` whenever the restored session lacks the `required` role.
pub fn install_role_redirect<F>(session: SessionStore, required: UserType, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect(&session.get(), required) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Landing route after signing in as `user_type`.
pub fn home_route(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Customer => "/home",
        UserType::Distributor => "/distributor-dashboard",
    }
}
