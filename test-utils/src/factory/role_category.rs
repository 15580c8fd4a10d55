//! Role category factory for creating test role-category rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a role category with a default unique name.
pub async fn create_role_category(
    db: &DatabaseConnection,
    server_id: i64,
) -> Result<entity::role_category::Model, DbErr> {
    entity::role_category::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        name: ActiveValue::Set(format!("Role Category {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
