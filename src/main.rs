//! IskoArena Backend
//!
//! REST backend for the university intramurals admin console, with SQLite
//! persistence.

mod api;
mod auth;
mod config;
mod csv;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting IskoArena Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Live window: {} minutes", config.live_window_minutes);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Bootstrap admin account and optional demo fixtures
    db::seed_admin(&repo, &config).await?;
    if config.seed_demo {
        db::seed_demo_data(&repo).await?;
    }

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Auth
        .route("/auth/register", post(api::register))
        .route("/auth/login", post(api::login))
        // Datastore
        .route("/datastore", get(api::get_datastore))
        .route("/datastore/revision", get(api::get_revision))
        // Dashboard
        .route("/dashboard", get(api::get_dashboard))
        // Matches
        .route("/matches", get(api::list_matches))
        .route("/matches", post(api::create_match))
        .route("/matches/{id}", delete(api::delete_match))
        // Results
        .route("/results", get(api::list_results))
        .route("/results", post(api::record_result))
        // Players
        .route("/players", get(api::list_players))
        .route("/players", post(api::create_player))
        .route("/players", delete(api::delete_all_players))
        .route("/players/export", get(api::export_players))
        .route("/players/import", post(api::import_players))
        .route("/players/{id}", delete(api::delete_player))
        // Teams
        .route("/teams", get(api::list_teams))
        .route("/teams", post(api::create_team))
        .route("/teams/{id}", delete(api::delete_team))
        // Stats
        .route("/stats", get(api::list_stats))
        .route("/stats", post(api::create_stat))
        .route("/stats/export", get(api::export_stats))
        .route("/stats/{id}", put(api::update_stat))
        .route("/stats/{id}", delete(api::delete_stat))
        // Media
        .route("/media", get(api::list_media))
        .route("/media", post(api::upload_media))
        // Notifications
        .route("/notifications", get(api::list_notifications))
        .route("/notifications", post(api::send_notification))
        // Archives
        .route("/archives", get(api::get_archives));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
