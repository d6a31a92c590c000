//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin console is a single client-routed app: every path that is not
//! a static asset or `/healthz` gets the Leptos SSR shell, and the browser
//! bundle resolves the route after hydration.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the full router: health probe, `/pkg` assets, and SSR fallback.
pub fn app(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let options = config.leptos.clone();
    let render = leptos_axum::render_app_to_stream(move || admin_client::app::shell(options.clone()));

    let pkg_dir = PathBuf::from(&config.site_root).join("pkg");
    tracing::debug!(pkg_dir = %pkg_dir.display(), "serving static assets");

    Router::new()
        .route("/healthz", get(health::healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(render)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
