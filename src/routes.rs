//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders and serves the Leptos client. Quiz data, logins and
//! sessions belong to the separate API the browser talks to directly; this
//! router just tells the browser where that API lives via `/app-config.js`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use client::app::RUNTIME_CONFIG_SCRIPT;
use client::util::config::RUNTIME_CONFIG_GLOBAL;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, HostConfig};

/// SSR app + static assets + host endpoints.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    let script = render_runtime_config(&config.api_base_url);

    Ok(host_routes(script)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Endpoints owned by the host itself.
fn host_routes(script: String) -> Router {
    Router::new().route("/healthz", get(healthz)).route(
        RUNTIME_CONFIG_SCRIPT,
        get(move || {
            let script = script.clone();
            async move { runtime_config_response(script) }
        }),
    )
}

/// JavaScript assigning the browser-side runtime config object.
fn render_runtime_config(api_base_url: &str) -> String {
    let payload = serde_json::json!({ "api_base_url": api_base_url });
    format!("window.{RUNTIME_CONFIG_GLOBAL} = {payload};\n")
}

fn runtime_config_response(script: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        script,
    )
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
