use models::user::User;

use crate::error::ServiceError;
use crate::store::EntityStore;

/// Read/delete glue over user records.
pub struct UserService;

impl UserService {
    pub async fn find_by_id<S: EntityStore + ?Sized>(
        store: &S,
        id: i64,
    ) -> Result<Option<User>, ServiceError> {
        Ok(store.find_user(id).await?)
    }

    /// Unconditional delete by id; session rosters referencing the user are
    /// the store's concern.
    pub async fn delete<S: EntityStore + ?Sized>(store: &S, id: i64) -> Result<(), ServiceError> {
        Ok(store.delete_user(id).await?)
    }
}
