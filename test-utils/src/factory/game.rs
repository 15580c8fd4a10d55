//! Game factory for creating test game rows.
//!
//! Provides a builder for games with sensible defaults; the server must exist
//! first (use the server factory).

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db, server.server_id)
///     .name("Valorant")
///     .category_id(Some(category.category_id))
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: i64,
    name: String,
    description: Option<String>,
    category_id: Option<i32>,
    thumbnail: Option<Vec<u8>>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - name: `"Game {id}"` where id is auto-incremented
    /// - description: `None`
    /// - category_id: `None`
    /// - thumbnail: `None`
    pub fn new(db: &'a DatabaseConnection, server_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            server_id,
            name: format!("Game {}", id),
            description: None,
            category_id: None,
            thumbnail: None,
        }
    }

    /// Sets the game name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the game description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the category reference.
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the thumbnail bytes.
    pub fn thumbnail(mut self, thumbnail: Option<Vec<u8>>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    /// Builds and inserts the game entity.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            category_id: ActiveValue::Set(self.category_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            thumbnail: ActiveValue::Set(self.thumbnail),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(
    db: &DatabaseConnection,
    server_id: i64,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db, server_id).build().await
}
