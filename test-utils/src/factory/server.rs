//! Server factory for creating test tenant rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a server with a generated snowflake-ish ID.
///
/// # Returns
/// - `Ok(entity::server::Model)` - Created server entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    // Offset keeps generated IDs clear of small literal IDs used in tests.
    create_server_with_id(db, 1_000_000 + next_id() as i64).await
}

/// Creates a server with a specific external guild ID.
pub async fn create_server_with_id(
    db: &DatabaseConnection,
    server_id: i64,
) -> Result<entity::server::Model, DbErr> {
    entity::server::ActiveModel {
        server_id: ActiveValue::Set(server_id),
    }
    .insert(db)
    .await
}
