//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets a unique identifier to prevent
/// collisions across factories within one test database.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with a game belonging to it.
///
/// Convenience for tests that only need one game and don't care about
/// server identity.
///
/// # Returns
/// - `Ok((server, game))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_game(
    db: &DatabaseConnection,
) -> Result<(entity::server::Model, entity::game::Model), DbErr> {
    let server = crate::factory::server::create_server(db).await?;
    let game = crate::factory::game::create_game(db, server.server_id).await?;

    Ok((server, game))
}
