//! Role factory for creating test Discord role mirror rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a role with a generated snowflake-ish ID and no role category.
pub async fn create_role(
    db: &DatabaseConnection,
    server_id: i64,
) -> Result<entity::role::Model, DbErr> {
    create_role_with_id(db, server_id, 2_000_000 + next_id() as i64).await
}

/// Creates a role with a specific external role ID.
pub async fn create_role_with_id(
    db: &DatabaseConnection,
    server_id: i64,
    role_id: i64,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        role_id: ActiveValue::Set(role_id),
        server_id: ActiveValue::Set(server_id),
        role_category_id: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
