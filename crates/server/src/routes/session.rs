use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::{ParticipationService, SessionService};
use database::store::EntityStore;

use crate::app::AppState;
use crate::dtos::session::{CreateSessionRequest, SessionResponse, UpdateSessionRequest};
use crate::routes::error_status;

/// Get all sessions
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "List of sessions", body = [SessionResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Sessions"
)]
pub async fn get_sessions<S: EntityStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<SessionResponse>>, StatusCode> {
    let sessions = SessionService::find_all(state.store.as_ref())
        .await
        .map_err(error_status)?;

    Ok(Json(sessions.into_iter().map(SessionResponse::from).collect()))
}

/// Get a specific session by ID
#[utoipa::path(
    get,
    path = "/api/session/{id}",
    params(
        ("id" = i64, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session found", body = SessionResponse),
        (status = 400, description = "Invalid session ID"),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
pub async fn get_session_by_id<S: EntityStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<SessionResponse>, StatusCode> {
    let session = SessionService::get_by_id(state.store.as_ref(), id)
        .await
        .map_err(error_status)?;

    match session {
        Some(session) => Ok(Json(session.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Create a new session
#[utoipa::path(
    post,
    path = "/api/session",
    request_body = CreateSessionRequest,
    responses(
        (status = 200, description = "Session created", body = SessionResponse),
        (status = 400, description = "Invalid payload")
    ),
    tag = "Sessions"
)]
pub async fn create_session<S: EntityStore>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, StatusCode> {
    let session = SessionService::create(state.store.as_ref(), payload.into())
        .await
        .map_err(error_status)?;

    Ok(Json(session.into()))
}

/// Update a session's fields; the id in the path takes precedence over any
/// id in the payload
#[utoipa::path(
    put,
    path = "/api/session/{id}",
    params(
        ("id" = i64, Path, description = "Session ID")
    ),
    request_body = UpdateSessionRequest,
    responses(
        (status = 200, description = "Session updated", body = SessionResponse),
        (status = 400, description = "Invalid session ID or payload"),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
pub async fn update_session<S: EntityStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSessionRequest>,
) -> Result<Json<SessionResponse>, StatusCode> {
    let session = SessionService::update(state.store.as_ref(), id, payload.into())
        .await
        .map_err(error_status)?;

    Ok(Json(session.into()))
}

/// Delete a session by ID
#[utoipa::path(
    delete,
    path = "/api/session/{id}",
    params(
        ("id" = i64, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session deleted"),
        (status = 400, description = "Invalid session ID"),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
pub async fn delete_session<S: EntityStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    // The service deletes unconditionally; the distinct 404 comes from
    // checking existence here first.
    let session = SessionService::get_by_id(state.store.as_ref(), id)
        .await
        .map_err(error_status)?;

    if session.is_none() {
        return Err(StatusCode::NOT_FOUND);
    }

    SessionService::delete(state.store.as_ref(), id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::OK)
}

/// Enroll a user into a session
#[utoipa::path(
    post,
    path = "/api/session/{id}/participate/{user_id}",
    params(
        ("id" = i64, Path, description = "Session ID"),
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User enrolled"),
        (status = 400, description = "Invalid ID or user already enrolled"),
        (status = 404, description = "Session or user not found")
    ),
    tag = "Sessions"
)]
pub async fn participate<S: EntityStore>(
    State(state): State<AppState<S>>,
    Path((id, user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, StatusCode> {
    ParticipationService::participate(state.store.as_ref(), id, user_id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::OK)
}

/// Withdraw a user from a session
#[utoipa::path(
    delete,
    path = "/api/session/{id}/participate/{user_id}",
    params(
        ("id" = i64, Path, description = "Session ID"),
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User withdrawn"),
        (status = 400, description = "Invalid ID or user not enrolled"),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
pub async fn withdraw<S: EntityStore>(
    State(state): State<AppState<S>>,
    Path((id, user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, StatusCode> {
    ParticipationService::withdraw(state.store.as_ref(), id, user_id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::OK)
}
