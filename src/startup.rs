//! Process bootstrap: logging, database connection, migrations.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::CatalogError};

/// Installs the global tracing subscriber. `RUST_LOG` controls the filter and
/// defaults to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Connects to the database and applies any pending migrations.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, CatalogError> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .min_connections(config.db_min_connections)
        .max_connections(config.db_max_connections);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    tracing::info!("database connected and migrated");

    Ok(db)
}
