use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_server_table::Server,
    m20260101_000004_create_role_category_table::RoleCategory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(big_integer(Role::RoleId).primary_key())
                    .col(big_integer(Role::ServerId))
                    .col(integer_null(Role::RoleCategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_server_id")
                            .from(Role::Table, Role::ServerId)
                            .to(Server::Table, Server::ServerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_role_category_id")
                            .from(Role::Table, Role::RoleCategoryId)
                            .to(RoleCategory::Table, RoleCategory::RoleCategoryId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Role {
    #[sea_orm(iden = "roles")]
    Table,
    RoleId,
    ServerId,
    RoleCategoryId,
}
