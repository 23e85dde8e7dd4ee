use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use models::session::{CreateSession, Session};
use models::teacher::{CreateTeacher, Teacher};
use models::user::{CreateUser, User};

use crate::entities::{session, session_user, teacher, user};
use crate::error::StoreError;
use crate::store::EntityStore;

/// [`EntityStore`] implementation over a sea-orm `DatabaseConnection`.
///
/// The session aggregate spans two tables: the `sessions` row and its
/// `session_users` junction rows, whose autoincrement ids carry the roster's
/// insertion order. `save_session` rewrites both inside one transaction.
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    fn to_session(row: session::Model, users: Vec<i64>) -> Session {
        Session {
            id: row.id,
            name: row.name,
            date: row.date,
            description: row.description,
            teacher_id: row.teacher_id,
            users,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn to_user(row: user::Model) -> User {
        User {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            password: row.password,
            admin: row.admin,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn to_teacher(row: teacher::Model) -> Teacher {
        Teacher {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl EntityStore for SeaOrmStore {
    async fn insert_session(&self, input: CreateSession) -> Result<Session, StoreError> {
        let now = Self::now();
        let row = session::ActiveModel {
            name: Set(input.name),
            date: Set(input.date),
            description: Set(input.description),
            teacher_id: Set(input.teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Self::to_session(row, Vec::new()))
    }

    async fn save_session(&self, sess: &Session) -> Result<Session, StoreError> {
        let txn = self.db.begin().await?;
        let now = Self::now();

        let row = session::ActiveModel {
            id: Set(sess.id),
            name: Set(sess.name.clone()),
            date: Set(sess.date),
            description: Set(sess.description.clone()),
            teacher_id: Set(sess.teacher_id),
            created_at: Set(sess.created_at),
            updated_at: Set(now),
        };
        let row = if session::Entity::find_by_id(sess.id).one(&txn).await?.is_some() {
            row.update(&txn).await?
        } else {
            row.insert(&txn).await?
        };

        // Rewrite the roster; junction ids are assigned in statement order,
        // preserving the vec order on readback.
        session_user::Entity::delete_many()
            .filter(session_user::Column::SessionId.eq(sess.id))
            .exec(&txn)
            .await?;

        if !sess.users.is_empty() {
            let rows = sess.users.iter().map(|&user_id| session_user::ActiveModel {
                session_id: Set(sess.id),
                user_id: Set(user_id),
                created_at: Set(now),
                ..Default::default()
            });
            session_user::Entity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(Self::to_session(row, sess.users.clone()))
    }

    async fn find_session(&self, id: i64) -> Result<Option<Session>, StoreError> {
        let (row, members) = futures::try_join!(
            session::Entity::find_by_id(id).one(&self.db),
            session_user::Entity::find()
                .filter(session_user::Column::SessionId.eq(id))
                .order_by_asc(session_user::Column::Id)
                .all(&self.db),
        )?;

        Ok(row.map(|row| Self::to_session(row, members.into_iter().map(|m| m.user_id).collect())))
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, StoreError> {
        let (rows, members) = futures::try_join!(
            session::Entity::find().all(&self.db),
            session_user::Entity::find()
                .order_by_asc(session_user::Column::Id)
                .all(&self.db),
        )?;

        let mut rosters: HashMap<i64, Vec<i64>> = HashMap::new();
        for member in members {
            rosters.entry(member.session_id).or_default().push(member.user_id);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let users = rosters.remove(&row.id).unwrap_or_default();
                Self::to_session(row, users)
            })
            .collect())
    }

    async fn delete_session(&self, id: i64) -> Result<(), StoreError> {
        // Junction rows go with the session via ON DELETE CASCADE.
        session::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn session_exists(&self, id: i64) -> Result<bool, StoreError> {
        Ok(session::Entity::find_by_id(id).one(&self.db).await?.is_some())
    }

    async fn insert_user(&self, input: CreateUser) -> Result<User, StoreError> {
        let now = Self::now();
        let row = user::ActiveModel {
            email: Set(input.email),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            password: Set(input.password),
            admin: Set(input.admin),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Self::to_user(row))
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Self::to_user))
    }

    async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        user::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn user_exists(&self, id: i64) -> Result<bool, StoreError> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?.is_some())
    }

    async fn insert_teacher(&self, input: CreateTeacher) -> Result<Teacher, StoreError> {
        let now = Self::now();
        let row = teacher::ActiveModel {
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Self::to_teacher(row))
    }

    async fn find_teacher(&self, id: i64) -> Result<Option<Teacher>, StoreError> {
        Ok(teacher::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Self::to_teacher))
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        Ok(teacher::Entity::find()
            .order_by_asc(teacher::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Self::to_teacher)
            .collect())
    }
}
