use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, SqlErr};

use crate::error::CatalogError;
use crate::model::Inserted;

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a server. Creating a server that already exists is a no-op
    /// reported as [`Inserted::AlreadyExists`].
    pub async fn create(&self, server_id: u64) -> Result<Inserted<()>, CatalogError> {
        let result = entity::server::ActiveModel {
            server_id: ActiveValue::Set(server_id as i64),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(_) => Ok(Inserted::Created(())),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(Inserted::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn exists(&self, server_id: u64) -> Result<bool, CatalogError> {
        let count = entity::prelude::Server::find_by_id(server_id as i64)
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Verifies the server is registered, as a guard for child-entity writes.
    pub async fn require(&self, server_id: u64) -> Result<(), CatalogError> {
        if self.exists(server_id).await? {
            Ok(())
        } else {
            Err(CatalogError::NotFound(format!(
                "server {server_id} is not registered"
            )))
        }
    }
}
