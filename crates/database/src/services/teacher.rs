use models::teacher::Teacher;

use crate::error::ServiceError;
use crate::store::EntityStore;

/// Read-only glue over teacher records.
pub struct TeacherService;

impl TeacherService {
    pub async fn find_all<S: EntityStore + ?Sized>(store: &S) -> Result<Vec<Teacher>, ServiceError> {
        Ok(store.list_teachers().await?)
    }

    pub async fn find_by_id<S: EntityStore + ?Sized>(
        store: &S,
        id: i64,
    ) -> Result<Option<Teacher>, ServiceError> {
        Ok(store.find_teacher(id).await?)
    }
}
