use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000003_create_tag_table::Tag, m20260101_000006_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameTag::Table)
                    .if_not_exists()
                    .col(integer(GameTag::GameId))
                    .col(integer(GameTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(GameTag::GameId)
                            .col(GameTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tag_game_id")
                            .from(GameTag::Table, GameTag::GameId)
                            .to(Game::Table, Game::GameId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tag_tag_id")
                            .from(GameTag::Table, GameTag::TagId)
                            .to(Tag::Table, Tag::TagId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameTag {
    #[sea_orm(iden = "game_tags")]
    Table,
    GameId,
    TagId,
}
