use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Add entity tables with `with_table()`, or use
/// `with_catalog_tables()` for the full catalog schema, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Server, Game};
///
/// let test = TestBuilder::new()
///     .with_table(Server)
///     .with_table(Game)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in order.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Tables should be added in dependency order (tables
    /// with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create after the tables.
    pub fn with_index(mut self, stmt: IndexCreateStatement) -> Self {
        self.indexes.push(stmt);
        self
    }

    /// Adds all tables required for catalog operations.
    ///
    /// Adds the following tables in dependency order, plus the composite unique
    /// indexes on tag and category names per server:
    /// - Server
    /// - Category
    /// - Tag
    /// - RoleCategory
    /// - Role
    /// - Game
    /// - GameTag
    /// - GameRole
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Server)
            .with_table(Category)
            .with_table(Tag)
            .with_table(RoleCategory)
            .with_table(Role)
            .with_table(Game)
            .with_table(GameTag)
            .with_table(GameRole)
            .with_index(
                Index::create()
                    .name("idx_category_server_name")
                    .table(Category)
                    .col(entity::category::Column::ServerId)
                    .col(entity::category::Column::Name)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_tag_server_name")
                    .table(Tag)
                    .col(entity::tag::Column::ServerId)
                    .col(entity::tag::Column::Name)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with the configured schema.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context, tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
