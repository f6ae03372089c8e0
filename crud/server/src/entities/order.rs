use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub id_user: i32,
    pub id_good: i32,
    /// Free-form date text, kept exactly as the client sent it.
    pub data_order: String,
    pub status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::IdUser",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::good::Entity",
        from = "Column::IdGood",
        to = "super::good::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Good,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::good::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Good.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
