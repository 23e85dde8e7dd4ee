use crate::routes::{health, session, teacher, user};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        session::get_sessions,
        session::get_session_by_id,
        session::create_session,
        session::update_session,
        session::delete_session,
        session::participate,
        session::withdraw,
        teacher::get_teachers,
        teacher::get_teacher_by_id,
        user::get_user_by_id,
        user::delete_user
    ),
    tags(
        (name = "Sessions", description = "Session lifecycle and participation endpoints"),
        (name = "Teachers", description = "Teacher related endpoints"),
        (name = "Users", description = "User related endpoints"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Sessions API",
        version = "1.0.0",
        description = "Session booking API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
