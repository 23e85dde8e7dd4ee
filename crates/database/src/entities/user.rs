use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub admin: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session_user::Entity")]
    SessionUsers,
}

impl Related<super::session_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionUsers.def()
    }
}

// Many-to-many relationship with sessions
impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        super::session_user::Relation::Session.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::session_user::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
