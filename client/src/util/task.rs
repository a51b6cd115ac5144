//! Browser task helpers.
//!
//! Async work only runs in the browser. During server rendering spawned
//! futures are dropped unpolled, which leaves pages in their initial loading
//! state for hydration to pick up.

#![allow(clippy::unused_async)]

use std::future::Future;
use std::time::Duration;

use super::request_guard::{RequestGuard, Ticket};

/// Run `fut` on the browser event loop.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Resolve after `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = duration;
}

/// Run `fut` and hand its output to `apply`, unless `guard` has moved past
/// `ticket` (a newer request started or the page unmounted) by the time it
/// completes.
pub fn spawn_guarded<T, F, A>(guard: RequestGuard, ticket: Ticket, fut: F, apply: A)
where
    T: 'static,
    F: Future<Output = T> + 'static,
    A: FnOnce(T) + 'static,
{
    spawn(async move {
        let output = fut.await;
        if guard.accepts(ticket) {
            apply(output);
        } else {
            leptos::logging::log!("dropping stale response");
        }
    });
}
