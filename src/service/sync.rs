use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::data::RoleRepository;
use crate::directory::GuildDirectory;
use crate::error::CatalogError;
use crate::model::role::{RoleRemovalMode, RoleRemovalOutcome, RoleSyncReport};

/// Reconciles the mirrored role set against the guild's live roles.
///
/// A role on Discord but not in the catalog is mirrored; a role in the
/// catalog but gone from Discord is unmapped from games and deleted. Running
/// a second sync against unchanged guild state is a no-op.
pub struct RoleSyncService<'a, D> {
    db: &'a DatabaseConnection,
    directory: &'a D,
}

impl<'a, D: GuildDirectory> RoleSyncService<'a, D> {
    pub fn new(db: &'a DatabaseConnection, directory: &'a D) -> Self {
        Self { db, directory }
    }

    /// Fetches the guild's live roles from Discord and applies them.
    pub async fn sync(&self, server_id: u64) -> Result<RoleSyncReport, CatalogError> {
        let live = self.directory.roles(server_id).await?;
        let ids: Vec<u64> = live.into_iter().map(|role| role.id).collect();
        self.apply(server_id, &ids).await
    }

    /// Applies a known live-role set without touching Discord.
    pub async fn apply(
        &self,
        server_id: u64,
        live_role_ids: &[u64],
    ) -> Result<RoleSyncReport, CatalogError> {
        let repo = RoleRepository::new(self.db);
        let stored: HashSet<u64> = repo
            .list(server_id)
            .await?
            .into_iter()
            .map(|role| role.id)
            .collect();
        let live: HashSet<u64> = live_role_ids.iter().copied().collect();

        let mut report = RoleSyncReport::default();
        for &role_id in live.difference(&stored) {
            if repo.create(server_id, role_id).await?.is_created() {
                report.roles_created.push(role_id);
            }
        }
        for &role_id in stored.difference(&live) {
            match repo
                .handle_removed(role_id, server_id, RoleRemovalMode::Delete)
                .await?
            {
                RoleRemovalOutcome::Removed { affected_games, .. } => {
                    report.roles_deleted.push(role_id);
                    if !affected_games.is_empty() {
                        tracing::info!(
                            role_id,
                            server_id,
                            games = affected_games.len(),
                            "removed role was mapped to games"
                        );
                    }
                }
                // Already gone, e.g. a concurrent sync got there first.
                RoleRemovalOutcome::NotFound => {}
            }
        }

        report.roles_created.sort_unstable();
        report.roles_deleted.sort_unstable();
        tracing::debug!(
            server_id,
            created = report.roles_created.len(),
            deleted = report.roles_deleted.len(),
            "role sync finished"
        );
        Ok(report)
    }
}
