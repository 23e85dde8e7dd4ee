use models::session::Session;

use crate::error::ServiceError;
use crate::store::EntityStore;

/// Enrollment transitions on a session's roster.
///
/// Validation always precedes mutation: either every precondition holds and
/// exactly one `save_session` is written, or nothing is written and the first
/// violated precondition is returned. There is no concurrency control here —
/// two concurrent `participate` calls for the same (session, user) pair can
/// both pass the membership check before either write lands. That
/// read-modify-write race is inherited from the modeled system and left to
/// the store backend (the SQL schema's unique (session_id, user_id) index
/// turns it into a store error).
pub struct ParticipationService;

impl ParticipationService {
    /// Adds the user to the session's roster, append-at-end.
    ///
    /// # Errors
    ///
    /// `SessionNotFound`/`UserNotFound` if either record is absent;
    /// `AlreadyParticipating` if the user is already on the roster.
    pub async fn participate<S: EntityStore + ?Sized>(
        store: &S,
        session_id: i64,
        user_id: i64,
    ) -> Result<Session, ServiceError> {
        let mut session = store
            .find_session(session_id)
            .await?
            .ok_or(ServiceError::SessionNotFound(session_id))?;

        let user = store
            .find_user(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound(user_id))?;

        if session.has_participant(user.id) {
            return Err(ServiceError::AlreadyParticipating {
                session_id,
                user_id,
            });
        }

        session.users.push(user.id);
        Ok(store.save_session(&session).await?)
    }

    /// Removes the user from the session's roster.
    ///
    /// Membership is judged by the roster alone; the user record itself is
    /// not re-fetched, so withdrawing stays possible after the user row is
    /// gone from the store.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` if the session is absent; `NotParticipating` if the
    /// user is not on the roster.
    pub async fn withdraw<S: EntityStore + ?Sized>(
        store: &S,
        session_id: i64,
        user_id: i64,
    ) -> Result<Session, ServiceError> {
        let mut session = store
            .find_session(session_id)
            .await?
            .ok_or(ServiceError::SessionNotFound(session_id))?;

        if !session.has_participant(user_id) {
            return Err(ServiceError::NotParticipating {
                session_id,
                user_id,
            });
        }

        session.users.retain(|&id| id != user_id);
        Ok(store.save_session(&session).await?)
    }
}
