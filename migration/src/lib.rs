pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_server_table;
mod m20260101_000002_create_category_table;
mod m20260101_000003_create_tag_table;
mod m20260101_000004_create_role_category_table;
mod m20260101_000005_create_role_table;
mod m20260101_000006_create_game_table;
mod m20260101_000007_create_game_tag_table;
mod m20260101_000008_create_game_role_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_server_table::Migration),
            Box::new(m20260101_000002_create_category_table::Migration),
            Box::new(m20260101_000003_create_tag_table::Migration),
            Box::new(m20260101_000004_create_role_category_table::Migration),
            Box::new(m20260101_000005_create_role_table::Migration),
            Box::new(m20260101_000006_create_game_table::Migration),
            Box::new(m20260101_000007_create_game_tag_table::Migration),
            Box::new(m20260101_000008_create_game_role_table::Migration),
        ]
    }
}
