use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod analytics;
pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;
pub mod validation;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
}

/// Build the full application router around the given state.
pub fn app(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/api/auth/signup", post(handlers::auth::signup))
        .route("/api/auth/login", post(handlers::auth::login));

    let protected_routes = Router::new()
        // Auth actions requiring a session
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/auth/profile", put(handlers::auth::update_profile))
        // Moods
        .route("/api/moods", post(handlers::moods::add_mood))
        .route("/api/moods", get(handlers::moods::get_moods))
        .route("/api/moods/by-date", get(handlers::moods::get_mood_by_date))
        .route("/api/moods/:id", put(handlers::moods::update_mood))
        .route("/api/moods/:id", delete(handlers::moods::delete_mood))
        .route(
            "/api/moods/analytics",
            get(handlers::moods::get_mood_analytics),
        )
        // Habits
        .route("/api/habits", post(handlers::habits::add_habit))
        .route("/api/habits", get(handlers::habits::get_habits))
        .route(
            "/api/habits/by-date",
            get(handlers::habits::get_habits_by_date),
        )
        .route("/api/habits/:id", put(handlers::habits::update_habit))
        .route("/api/habits/:id", delete(handlers::habits::delete_habit))
        .route(
            "/api/habits/analytics",
            get(handlers::habits::get_habit_analytics),
        )
        .route(
            "/api/habits/analytics/leaderboard",
            get(handlers::habits::get_habit_leaderboard),
        )
        // Sleep
        .route("/api/sleep", post(handlers::sleep::add_sleep))
        .route("/api/sleep", get(handlers::sleep::get_sleep))
        .route("/api/sleep/by-date", get(handlers::sleep::get_sleep_by_date))
        .route("/api/sleep/:id", put(handlers::sleep::update_sleep))
        .route("/api/sleep/:id", delete(handlers::sleep::delete_sleep))
        .route(
            "/api/sleep/analytics",
            get(handlers::sleep::get_sleep_analytics),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .client_url
                .parse::<axum::http::HeaderValue>()
                .expect("CLIENT_URL must be a valid origin"),
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
