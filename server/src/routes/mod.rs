//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only renders the Leptos storefront and serves its compiled
//! assets. Every data request goes from the browser straight to the backend
//! services, so there are no API routes here beyond `/healthz`.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Leptos SSR routes plus `/pkg` assets and the health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(storefront_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || storefront_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(leptos_router
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(config.site_root.join("pkg")))
        .fallback_service(ServeDir::new(&config.site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
