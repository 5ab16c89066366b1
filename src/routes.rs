//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders the six portfolio routes, `/pkg` serves the compiled
//! WASM/JS/CSS bundle, and anything else falls through to the static asset
//! directory (resume PDF, images). A path that is neither a route nor an
//! asset is rendered by the app's not-found page with a 404 status. The
//! contact/profile backend is a separate service and is not proxied here.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Health probe plus the static-asset fallback.
///
/// Requests that miss `static_dir` are answered by `not_found` with the
/// status forced to 404.
fn asset_routes(static_dir: &Path, not_found: Router) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(static_dir).not_found_service(not_found))
}

/// Renders the app shell for any path, so the client router's fallback
/// page is what a missed route shows.
fn not_found_page(leptos_options: LeptosOptions) -> Router {
    Router::new()
        .fallback(leptos_axum::file_and_error_handler(portfolio_client::app::shell))
        .with_state(leptos_options)
}

/// Full application router: SSR pages, bundle, assets, and request tracing.
pub fn app(leptos_options: LeptosOptions, static_dir: &Path) -> Router {
    let routes = generate_route_list(portfolio_client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let not_found = not_found_page(leptos_options.clone());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    leptos_router
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .merge(asset_routes(static_dir, not_found))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
