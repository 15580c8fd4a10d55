//! Category factory for creating test category rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test categories with customizable fields.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: i64,
    name: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new factory with a generated unique name.
    pub fn new(db: &'a DatabaseConnection, server_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            server_id,
            name: format!("Category {}", id),
        }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the category entity.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with a default unique name.
pub async fn create_category(
    db: &DatabaseConnection,
    server_id: i64,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db, server_id).build().await
}
