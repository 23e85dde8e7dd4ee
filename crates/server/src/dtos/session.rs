use chrono::NaiveDateTime;
use models::session::{CreateSession, Session, UpdateSession};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: i64,
    pub name: String,
    pub date: NaiveDateTime,
    pub description: String,
    pub teacher_id: Option<i64>,
    /// Ids of the enrolled users, in enrollment order
    pub users: Vec<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            name: session.name,
            date: session.date,
            description: session.description,
            teacher_id: session.teacher_id,
            users: session.users,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    pub name: String,
    pub date: NaiveDateTime,
    pub description: String,
    pub teacher_id: Option<i64>,
}

impl From<CreateSessionRequest> for CreateSession {
    fn from(req: CreateSessionRequest) -> Self {
        Self {
            name: req.name,
            date: req.date,
            description: req.description,
            teacher_id: req.teacher_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSessionRequest {
    /// Accepted but ignored; the id in the path wins
    pub id: Option<i64>,
    pub name: String,
    pub date: NaiveDateTime,
    pub description: String,
    pub teacher_id: Option<i64>,
}

impl From<UpdateSessionRequest> for UpdateSession {
    fn from(req: UpdateSessionRequest) -> Self {
        Self {
            name: req.name,
            date: req.date,
            description: req.description,
            teacher_id: req.teacher_id,
        }
    }
}
