use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::CategoryId))
                    .col(big_integer(Category::ServerId))
                    .col(string_len(Category::Name, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_server_id")
                            .from(Category::Table, Category::ServerId)
                            .to(Server::Table, Server::ServerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_category_server_name")
                    .table(Category::Table)
                    .col(Category::ServerId)
                    .col(Category::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    #[sea_orm(iden = "categories")]
    Table,
    CategoryId,
    ServerId,
    Name,
}
