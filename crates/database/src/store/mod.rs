//! The entity store: the persistence collaborator the services are handed.
//!
//! The store is an injected handle, never a singleton, so the services stay
//! testable without a live backing database. Two implementations are
//! provided: [`SeaOrmStore`] (PostgreSQL via sea-orm) and [`MemoryStore`]
//! (DashMap-backed, for tests and ephemeral deployments).

use async_trait::async_trait;

use models::session::{CreateSession, Session};
use models::teacher::{CreateTeacher, Teacher};
use models::user::{CreateUser, User};

use crate::error::StoreError;

mod memory;
mod seaorm;

pub use memory::MemoryStore;
pub use seaorm::SeaOrmStore;

/// CRUD primitives over session, user and teacher records.
///
/// Absence is reported as `None`/`false`, not as an error; `StoreError` is
/// reserved for backend failures. Identity and timestamps are assigned by
/// the store on insert. `save_session` is the single write primitive for the
/// session aggregate: it persists the scalar fields and the whole roster in
/// one call, so a failed precondition upstream never leaves partial state
/// behind.
#[async_trait]
pub trait EntityStore: Send + Sync {
    // Sessions
    async fn insert_session(&self, input: CreateSession) -> Result<Session, StoreError>;
    /// Upsert by id, bumping `updated_at` and replacing the stored roster
    /// with `session.users` (in order).
    async fn save_session(&self, session: &Session) -> Result<Session, StoreError>;
    async fn find_session(&self, id: i64) -> Result<Option<Session>, StoreError>;
    /// All sessions in store-native order; no re-sorting is imposed.
    async fn list_sessions(&self) -> Result<Vec<Session>, StoreError>;
    /// Unconditional delete; deleting an absent id is a no-op.
    async fn delete_session(&self, id: i64) -> Result<(), StoreError>;
    async fn session_exists(&self, id: i64) -> Result<bool, StoreError>;

    // Users
    async fn insert_user(&self, input: CreateUser) -> Result<User, StoreError>;
    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError>;
    /// Unconditional delete. Session rosters referencing the user are left
    /// to the backend (foreign keys on the SQL store); this design does not
    /// cascade-clean memberships.
    async fn delete_user(&self, id: i64) -> Result<(), StoreError>;
    async fn user_exists(&self, id: i64) -> Result<bool, StoreError>;

    // Teachers
    async fn insert_teacher(&self, input: CreateTeacher) -> Result<Teacher, StoreError>;
    async fn find_teacher(&self, id: i64) -> Result<Option<Teacher>, StoreError>;
    async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError>;
}
