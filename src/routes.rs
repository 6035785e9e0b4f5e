//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the liveness probe, the Leptos SSR app, and the compiled `/pkg`
//! assets under a single Axum router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on Leptos.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: health probe + SSR pages + static assets.
pub fn app(leptos_options: LeptosOptions, site_root: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = site_root.join(&*leptos_options.site_pkg_dir);

    health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
