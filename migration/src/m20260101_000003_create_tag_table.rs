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
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(pk_auto(Tag::TagId))
                    .col(big_integer(Tag::ServerId))
                    .col(string_len(Tag::Name, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_server_id")
                            .from(Tag::Table, Tag::ServerId)
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
                    .name("idx_tag_server_name")
                    .table(Tag::Table)
                    .col(Tag::ServerId)
                    .col(Tag::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tag {
    #[sea_orm(iden = "tags")]
    Table,
    TagId,
    ServerId,
    Name,
}
