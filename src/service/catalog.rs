use sea_orm::DatabaseConnection;

use crate::data::{
    CategoryRepository, GameRepository, RoleCategoryRepository, RoleRepository, ServerRepository,
    TagRepository,
};
use crate::error::CatalogError;
use crate::model::server::ServerSnapshot;

/// Read-side aggregation over a server's whole catalog.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the full catalog snapshot for a server, or `None` when the
    /// server is not registered. Empty collections come back as empty
    /// vectors, never as missing fields.
    pub async fn snapshot(&self, server_id: u64) -> Result<Option<ServerSnapshot>, CatalogError> {
        if !ServerRepository::new(self.db).exists(server_id).await? {
            return Ok(None);
        }

        Ok(Some(ServerSnapshot {
            server_id,
            roles: RoleRepository::new(self.db).list(server_id).await?,
            role_categories: RoleCategoryRepository::new(self.db).list(server_id).await?,
            categories: CategoryRepository::new(self.db).list(server_id).await?,
            tags: TagRepository::new(self.db).list(server_id).await?,
            games: GameRepository::new(self.db).list_by_server(server_id).await?,
        }))
    }
}
