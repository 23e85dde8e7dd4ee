use sea_orm::DbErr;
use thiserror::Error;

/// Failures of the persistence backend itself. Absence of a record is never
/// a `StoreError`; stores report it as `None`/`false`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Errors raised by the session and participation services.
///
/// The `*NotFound` variants map to HTTP 404 at the boundary; the two
/// membership conflicts map to 400, matching the original wire contract
/// (a conflicting transition is treated as a bad request, not a 409).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("session {0} not found")]
    SessionNotFound(i64),

    #[error("user {0} not found")]
    UserNotFound(i64),

    #[error("user {user_id} already participates in session {session_id}")]
    AlreadyParticipating { session_id: i64, user_id: i64 },

    #[error("user {user_id} does not participate in session {session_id}")]
    NotParticipating { session_id: i64, user_id: i64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// True for the variants the boundary reports as 404.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::SessionNotFound(_) | ServiceError::UserNotFound(_)
        )
    }

    /// True for the variants the boundary reports as 400 (invalid
    /// membership transition).
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ServiceError::AlreadyParticipating { .. } | ServiceError::NotParticipating { .. }
        )
    }
}
