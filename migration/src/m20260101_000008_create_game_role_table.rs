use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000005_create_role_table::Role, m20260101_000006_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameRole::Table)
                    .if_not_exists()
                    .col(integer(GameRole::GameId))
                    .col(big_integer(GameRole::RoleId))
                    .primary_key(
                        Index::create()
                            .col(GameRole::GameId)
                            .col(GameRole::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_role_game_id")
                            .from(GameRole::Table, GameRole::GameId)
                            .to(Game::Table, Game::GameId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_role_role_id")
                            .from(GameRole::Table, GameRole::RoleId)
                            .to(Role::Table, Role::RoleId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameRole {
    #[sea_orm(iden = "game_roles")]
    Table,
    GameId,
    RoleId,
}
