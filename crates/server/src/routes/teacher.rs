use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::TeacherService;
use database::store::EntityStore;

use crate::app::AppState;
use crate::dtos::teacher::TeacherResponse;
use crate::routes::error_status;

/// Get all teachers
#[utoipa::path(
    get,
    path = "/api/teacher",
    responses(
        (status = 200, description = "List of teachers", body = [TeacherResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn get_teachers<S: EntityStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<TeacherResponse>>, StatusCode> {
    let teachers = TeacherService::find_all(state.store.as_ref())
        .await
        .map_err(error_status)?;

    Ok(Json(teachers.into_iter().map(TeacherResponse::from).collect()))
}

/// Get a specific teacher by ID
#[utoipa::path(
    get,
    path = "/api/teacher/{id}",
    params(
        ("id" = i64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher found", body = TeacherResponse),
        (status = 400, description = "Invalid teacher ID"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
pub async fn get_teacher_by_id<S: EntityStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<TeacherResponse>, StatusCode> {
    let teacher = TeacherService::find_by_id(state.store.as_ref(), id)
        .await
        .map_err(error_status)?;

    match teacher {
        Some(teacher) => Ok(Json(teacher.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}
