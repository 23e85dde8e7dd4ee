use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A bookable session together with its enrollment roster.
///
/// The teacher and the enrolled users are referenced by id only; callers that
/// need the full records resolve them against the store separately. `users`
/// is append-ordered and contains each user id at most once — the
/// participation service is the only writer that may assume and must uphold
/// this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub date: NaiveDateTime,
    pub description: String,
    pub teacher_id: Option<i64>,
    pub users: Vec<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Session {
    /// Whether the given user is on the roster.
    pub fn has_participant(&self, user_id: i64) -> bool {
        self.users.contains(&user_id)
    }
}

/// Fields the client supplies when creating a session. Identity and
/// timestamps are assigned by the store; the roster starts empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    pub name: String,
    pub date: NaiveDateTime,
    pub description: String,
    pub teacher_id: Option<i64>,
}

/// Mutable session fields for an update. The roster and `created_at` are
/// preserved across updates; membership only changes through participation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSession {
    pub name: String,
    pub date: NaiveDateTime,
    pub description: String,
    pub teacher_id: Option<i64>,
}
