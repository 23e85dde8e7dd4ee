use axum::http::StatusCode;
use database::error::ServiceError;

pub mod health;
pub mod session;
pub mod teacher;
pub mod user;

/// Translates a service error into the transport status: missing records
/// are 404, invalid membership transitions are 400 (not 409, matching the
/// observed contract), store failures are logged and become 500.
pub(crate) fn error_status(err: ServiceError) -> StatusCode {
    if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_conflict() {
        StatusCode::BAD_REQUEST
    } else {
        log::error!("store failure: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
