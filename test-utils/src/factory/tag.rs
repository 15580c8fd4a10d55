//! Tag factory for creating test tag rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a tag with a default unique name.
pub async fn create_tag(
    db: &DatabaseConnection,
    server_id: i64,
) -> Result<entity::tag::Model, DbErr> {
    create_tag_named(db, server_id, format!("tag-{}", next_id())).await
}

/// Creates a tag with a specific name.
pub async fn create_tag_named(
    db: &DatabaseConnection,
    server_id: i64,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
