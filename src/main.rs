//! Bedlam Ball Operations Backend
//!
//! A REST backend with SQLite persistence for running festival operations:
//! attendees, accommodation, programme scheduling, the bar till and the
//! staff bulletin board.

mod api;
mod auth;
mod config;
mod core;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub sessions: SessionStore,
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

    tracing::info!("Starting Bedlam Ball Operations Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Seed default records on first boot
    if config.seed_defaults {
        db::seed_defaults(&repo).await?;
    }

    // Create application state
    let state = AppState {
        repo,
        sessions: SessionStore::default(),
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

    // Clone the session map for the auth layer
    let sessions = state.sessions.clone();

    // Authenticated API routes
    let api_routes = Router::new()
        // Session
        .route("/auth/logout", post(api::logout))
        .route("/auth/me", get(api::me))
        // Datastore
        .route("/datastore", get(api::get_datastore))
        // Users (admin only)
        .route("/users", get(api::list_users))
        .route("/users", post(api::create_user))
        .route("/users/{username}", put(api::update_user))
        .route("/users/{username}", delete(api::delete_user))
        // Attendees
        .route("/attendees", get(api::list_attendees))
        .route("/attendees", post(api::create_attendee))
        .route("/attendees/{id}", get(api::get_attendee))
        .route("/attendees/{id}", put(api::update_attendee))
        .route("/attendees/{id}", delete(api::delete_attendee))
        .route("/attendees/{id}/check-in", post(api::check_in_attendee))
        .route("/attendees/{id}/check-out", post(api::check_out_attendee))
        // Programme events
        .route("/events", get(api::list_events))
        .route("/events", post(api::create_event))
        .route("/events/{id}", put(api::update_event))
        .route("/events/{id}", delete(api::delete_event))
        // Staff shifts
        .route("/staff-shifts", get(api::list_staff_shifts))
        .route("/staff-shifts", post(api::create_staff_shift))
        .route("/staff-shifts/{id}", put(api::update_staff_shift))
        .route("/staff-shifts/{id}", delete(api::delete_staff_shift))
        // Volunteer shifts
        .route("/volunteer-shifts", get(api::list_volunteer_shifts))
        .route("/volunteer-shifts", post(api::create_volunteer_shift))
        .route("/volunteer-shifts/{id}", put(api::update_volunteer_shift))
        .route(
            "/volunteer-shifts/{id}",
            delete(api::delete_volunteer_shift),
        )
        // Schedule views
        .route("/schedule", get(api::combined_schedule))
        .route("/schedule/me", get(api::personal_schedule))
        .route("/schedule/upcoming", get(api::upcoming_events))
        // Accommodation
        .route("/accommodations", get(api::list_accommodations))
        .route("/accommodations/{id}/assign", post(api::assign_accommodation))
        .route("/accommodations/{id}/remove", post(api::remove_accommodation))
        // Till
        .route("/products", get(api::list_products))
        .route("/products", post(api::create_product))
        .route("/transactions", get(api::list_transactions))
        .route("/transactions", post(api::create_transaction))
        // Bulletins
        .route("/bulletins", get(api::list_bulletins))
        .route("/bulletins", post(api::create_bulletin))
        .route("/bulletins/mentions", get(api::list_mentions))
        .route("/bulletins/{id}", delete(api::delete_bulletin))
        .route("/bulletins/{id}/like", post(api::like_bulletin))
        .route("/bulletins/{id}/replies", post(api::reply_to_bulletin))
        // Apply session auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(sessions.clone(), req, next)
        }));

    // Login and health check sit outside the auth layer
    let open_routes = Router::new()
        .route("/api/auth/login", post(api::login))
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(open_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
