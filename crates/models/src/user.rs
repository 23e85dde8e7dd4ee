use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered user. Referenced by sessions through their id; two user
/// records with the same id are interchangeable for membership checks.
///
/// `password` is the stored credential as the store persists it. Credential
/// handling lives outside this system and the field is never serialized on
/// API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Fields supplied when inserting a user; id and timestamps come from the
/// store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub admin: bool,
}
