use sea_orm::entity::prelude::*;

/// A mirror of a Discord role. The ID is the external role snowflake;
/// the row exists only while the role exists in the live guild (role sync
/// deletes rows whose role disappeared from Discord).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i64,
    pub server_id: i64,
    pub role_category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::server::Entity",
        from = "Column::ServerId",
        to = "super::server::Column::ServerId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Server,
    #[sea_orm(
        belongs_to = "super::role_category::Entity",
        from = "Column::RoleCategoryId",
        to = "super::role_category::Column::RoleCategoryId",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    RoleCategory,
    #[sea_orm(has_many = "super::game_role::Entity")]
    GameRole,
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl Related<super::role_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleCategory.def()
    }
}

impl Related<super::game_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
