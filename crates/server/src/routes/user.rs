use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::UserService;
use database::store::EntityStore;

use crate::app::AppState;
use crate::dtos::user::UserResponse;
use crate::routes::error_status;

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user_by_id<S: EntityStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, StatusCode> {
    let user = UserService::find_by_id(state.store.as_ref(), id)
        .await
        .map_err(error_status)?;

    match user {
        Some(user) => Ok(Json(user.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn delete_user<S: EntityStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let user = UserService::find_by_id(state.store.as_ref(), id)
        .await
        .map_err(error_status)?;

    if user.is_none() {
        return Err(StatusCode::NOT_FOUND);
    }

    UserService::delete(state.store.as_ref(), id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::OK)
}
