//! Announcements web server.
//!
//! Provides the REST API backing the announcement cards and serves the
//! built frontend.

mod config;
mod routes;
mod state;

use anyhow::Context;
use axum::{Router, routing::get};
use clap::Parser;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use config::Config;
use routes::{list_announcements, list_companies};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::parse();

    let state = match &config.seed {
        Some(path) => AppState::from_file(path)
            .with_context(|| format!("loading seed file {}", path.display()))?,
        None => AppState::builtin().context("loading bundled seed")?,
    };
    info!(
        companies = state.companies.len(),
        announcements = state.total_announcements(),
        "Loaded announcements"
    );

    let app = build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    info!("Server listening on http://{}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/companies", get(list_companies))
        .route("/company/:handle/announcements", get(list_announcements));

    Router::new()
        .nest(web_types::API_PREFIX, api_routes)
        // Serve static files from frontend dist (when built)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
