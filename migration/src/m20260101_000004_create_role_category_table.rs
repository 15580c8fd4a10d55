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
                    .table(RoleCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(RoleCategory::RoleCategoryId))
                    .col(big_integer(RoleCategory::ServerId))
                    .col(string_len(RoleCategory::Name, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_category_server_id")
                            .from(RoleCategory::Table, RoleCategory::ServerId)
                            .to(Server::Table, Server::ServerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleCategory {
    #[sea_orm(iden = "role_categories")]
    Table,
    RoleCategoryId,
    ServerId,
    Name,
}
