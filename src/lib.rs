//! # Matchday - Match Records API
//!
//! A small JSON API to list, fetch, create, update and delete sports match
//! records stored in a PostgreSQL `match` table.
//!
//! ## Modules
//!
//! - [`config`] - Settings read from the process environment
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Match records, request and response bodies, shared state
//! - [`services`] - SQL statements against the store
//! - [`utils`] - Constants and tracing setup

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    create_match, delete_match, get_match, health_check, list_matches, update_match,
};
use crate::models::AppState;

/// Creates an Axum router with application routes and state.
///
/// Requests from any origin are allowed.
pub fn app(db_pool: PgPool) -> Router {
    let state = Arc::new(AppState::new(db_pool));

    Router::new()
        .route("/api/healthz", get(health_check))
        .route("/api/matches", get(list_matches).post(create_match))
        .route(
            "/api/matches/{id}",
            get(get_match).put(update_match).delete(delete_match),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
