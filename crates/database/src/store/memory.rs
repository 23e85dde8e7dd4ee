use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use dashmap::DashMap;

use models::session::{CreateSession, Session};
use models::teacher::{CreateTeacher, Teacher};
use models::user::{CreateUser, User};

use crate::error::StoreError;
use crate::store::EntityStore;

/// An in-memory [`EntityStore`] backed by `DashMap`s.
///
/// Assigns sequential i64 ids per table, like the SQL store's autoincrement
/// columns. Suitable for tests and ephemeral deployments; nothing survives a
/// restart.
#[derive(Default)]
pub struct MemoryStore {
    sessions: DashMap<i64, Session>,
    users: DashMap<i64, User>,
    teachers: DashMap<i64, Teacher>,
    next_session_id: AtomicI64,
    next_user_id: AtomicI64,
    next_teacher_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn insert_session(&self, input: CreateSession) -> Result<Session, StoreError> {
        let now = Self::now();
        let id = self.next_session_id.fetch_add(1, Ordering::Relaxed) + 1;
        let session = Session {
            id,
            name: input.name,
            date: input.date,
            description: input.description,
            teacher_id: input.teacher_id,
            users: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.sessions.insert(id, session.clone());
        Ok(session)
    }

    async fn save_session(&self, session: &Session) -> Result<Session, StoreError> {
        let mut saved = session.clone();
        saved.updated_at = Self::now();
        self.sessions.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn find_session(&self, id: i64) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, StoreError> {
        let mut sessions: Vec<Session> = self
            .sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        // DashMap iteration order is arbitrary; id order stands in for the
        // SQL store's native order.
        sessions.sort_by_key(|s| s.id);
        Ok(sessions)
    }

    async fn delete_session(&self, id: i64) -> Result<(), StoreError> {
        self.sessions.remove(&id);
        Ok(())
    }

    async fn session_exists(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.sessions.contains_key(&id))
    }

    async fn insert_user(&self, input: CreateUser) -> Result<User, StoreError> {
        let now = Self::now();
        let id = self.next_user_id.fetch_add(1, Ordering::Relaxed) + 1;
        let user = User {
            id,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password: input.password,
            admin: input.admin,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        self.users.remove(&id);
        Ok(())
    }

    async fn user_exists(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.users.contains_key(&id))
    }

    async fn insert_teacher(&self, input: CreateTeacher) -> Result<Teacher, StoreError> {
        let now = Self::now();
        let id = self.next_teacher_id.fetch_add(1, Ordering::Relaxed) + 1;
        let teacher = Teacher {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            created_at: now,
            updated_at: now,
        };
        self.teachers.insert(id, teacher.clone());
        Ok(teacher)
    }

    async fn find_teacher(&self, id: i64) -> Result<Option<Teacher>, StoreError> {
        Ok(self.teachers.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        let mut teachers: Vec<Teacher> = self
            .teachers
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        teachers.sort_by_key(|t| t.id);
        Ok(teachers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_session() -> CreateSession {
        CreateSession {
            name: "Morning flow".to_string(),
            date: Utc::now().naive_utc(),
            description: "Sun salutations".to_string(),
            teacher_id: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.insert_session(create_session()).await.unwrap();
        let second = store.insert_session(create_session()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.users.is_empty());
    }

    #[tokio::test]
    async fn save_preserves_roster_order() {
        let store = MemoryStore::new();
        let mut session = store.insert_session(create_session()).await.unwrap();
        session.users = vec![7, 3, 5];

        store.save_session(&session).await.unwrap();
        let found = store.find_session(session.id).await.unwrap().unwrap();

        assert_eq!(found.users, vec![7, 3, 5]);
    }

    #[tokio::test]
    async fn delete_absent_session_is_noop() {
        let store = MemoryStore::new();
        store.delete_session(42).await.unwrap();
        assert!(!store.session_exists(42).await.unwrap());
    }
}
