use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub date: DateTime,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub teacher_id: Option<i64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::session_user::Entity")]
    SessionUsers,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::session_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionUsers.def()
    }
}

// Many-to-many relationship with users
impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::session_user::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::session_user::Relation::Session.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
