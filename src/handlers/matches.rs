//! # Match Handlers
//!
//! CRUD endpoints over the `match` table. Each handler runs exactly one
//! statement through [`MatchStore`] and maps the outcome to 200, 404 or 500.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::models::{AppState, CreatedResponse, Match, MatchPayload, SuccessResponse};
use crate::services::match_store::MatchStore;

/// Lists every match.
///
/// GET /api/matches
///
/// # Returns
///
/// - `200 OK` with `Vec<Match>` - Ordered by `match_date` ascending
/// - `500 Internal Server Error` - Database error
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn list_matches(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Match>>> {
    let matches = MatchStore::list(&state.db_pool).await?;

    debug!(count = matches.len(), "Matches listed");
    Ok(Json(matches))
}

/// Fetches a single match.
///
/// GET /api/matches/{id}
///
/// # Returns
///
/// - `200 OK` with `Match`
/// - `404 Not Found` - No match with this id
/// - `500 Internal Server Error` - Database error
#[instrument(skip_all, fields(match_id = id, request_id = %uuid::Uuid::new_v4()))]
pub async fn get_match(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<Match>> {
    match MatchStore::find(&state.db_pool, id).await? {
        Some(found) => Ok(Json(found)),
        None => {
            warn!("Match not found");
            Err(AppError::NotFound("Match not found"))
        }
    }
}

/// Creates a match from the request body.
///
/// POST /api/matches
///
/// # Returns
///
/// - `200 OK` with `{"id": <new id>}`
/// - `500 Internal Server Error` - Database error, including rejected constraints
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn create_match(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<MatchPayload>,
) -> AppResult<Json<CreatedResponse>> {
    let id = MatchStore::create(&state.db_pool, &payload).await?;

    info!(match_id = id, "Match created");
    Ok(Json(CreatedResponse { id }))
}

/// Replaces every field of a match.
///
/// PUT /api/matches/{id}
///
/// Fields missing from the body are written as `NULL`. An id with no row
/// still yields success; the miss is only logged.
///
/// # Returns
///
/// - `200 OK` with `{"success": true}`
/// - `500 Internal Server Error` - Database error
#[instrument(skip_all, fields(match_id = id, request_id = %uuid::Uuid::new_v4()))]
pub async fn update_match(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<MatchPayload>,
) -> AppResult<Json<SuccessResponse>> {
    debug!(?payload, "Update request received");

    let rows_affected = MatchStore::update(&state.db_pool, id, &payload).await?;
    if rows_affected == 0 {
        warn!("Update matched no row");
    } else {
        info!("Match updated");
    }

    Ok(Json(SuccessResponse { success: true }))
}

/// Deletes a match.
///
/// DELETE /api/matches/{id}
///
/// # Returns
///
/// - `200 OK` with `{"success": true}` - Whether or not the row existed
/// - `500 Internal Server Error` - Database error
#[instrument(skip_all, fields(match_id = id, request_id = %uuid::Uuid::new_v4()))]
pub async fn delete_match(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<SuccessResponse>> {
    let rows_affected = MatchStore::delete(&state.db_pool, id).await?;
    if rows_affected == 0 {
        debug!("Delete matched no row");
    } else {
        info!("Match deleted");
    }

    Ok(Json(SuccessResponse { success: true }))
}
