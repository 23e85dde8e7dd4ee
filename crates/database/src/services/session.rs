use models::session::{CreateSession, Session, UpdateSession};

use crate::error::ServiceError;
use crate::store::EntityStore;

/// CRUD over session aggregates, independent of membership logic.
pub struct SessionService;

impl SessionService {
    /// Persists a new session; the store assigns id and timestamps and the
    /// roster starts empty.
    pub async fn create<S: EntityStore + ?Sized>(
        store: &S,
        input: CreateSession,
    ) -> Result<Session, ServiceError> {
        Ok(store.insert_session(input).await?)
    }

    /// All sessions, store-native order.
    pub async fn find_all<S: EntityStore + ?Sized>(store: &S) -> Result<Vec<Session>, ServiceError> {
        Ok(store.list_sessions().await?)
    }

    /// Absence is `None`, not an error; the boundary decides whether that
    /// becomes a 404.
    pub async fn get_by_id<S: EntityStore + ?Sized>(
        store: &S,
        id: i64,
    ) -> Result<Option<Session>, ServiceError> {
        Ok(store.find_session(id).await?)
    }

    /// Overwrites the session's mutable fields. The id from the call wins
    /// over anything embedded in the payload; the roster and `created_at`
    /// are preserved.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` if no session with that id exists.
    pub async fn update<S: EntityStore + ?Sized>(
        store: &S,
        id: i64,
        input: UpdateSession,
    ) -> Result<Session, ServiceError> {
        let mut session = store
            .find_session(id)
            .await?
            .ok_or(ServiceError::SessionNotFound(id))?;

        session.name = input.name;
        session.date = input.date;
        session.description = input.description;
        session.teacher_id = input.teacher_id;

        Ok(store.save_session(&session).await?)
    }

    /// Unconditional delete; no existence pre-check. Callers wanting a
    /// distinct not-found signal check existence first.
    pub async fn delete<S: EntityStore + ?Sized>(store: &S, id: i64) -> Result<(), ServiceError> {
        Ok(store.delete_session(id).await?)
    }
}
