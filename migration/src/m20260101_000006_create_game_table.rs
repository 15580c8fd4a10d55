use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_server_table::Server,
    m20260101_000002_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::GameId))
                    .col(big_integer(Game::ServerId))
                    .col(integer_null(Game::CategoryId))
                    .col(string_len(Game::Name, 100))
                    .col(text_null(Game::Description))
                    .col(binary_null(Game::Thumbnail))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_server_id")
                            .from(Game::Table, Game::ServerId)
                            .to(Server::Table, Server::ServerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_category_id")
                            .from(Game::Table, Game::CategoryId)
                            .to(Category::Table, Category::CategoryId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    #[sea_orm(iden = "games")]
    Table,
    GameId,
    ServerId,
    CategoryId,
    Name,
    Description,
    Thumbnail,
}
