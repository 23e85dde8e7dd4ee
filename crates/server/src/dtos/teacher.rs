use chrono::NaiveDateTime;
use models::teacher::Teacher;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Teacher> for TeacherResponse {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            first_name: teacher.first_name,
            last_name: teacher.last_name,
            created_at: teacher.created_at,
            updated_at: teacher.updated_at,
        }
    }
}
