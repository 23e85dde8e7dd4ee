use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A teacher who may lead sessions. Sessions hold at most one teacher
/// reference, by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Fields supplied when inserting a teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeacher {
    pub first_name: String,
    pub last_name: String,
}
