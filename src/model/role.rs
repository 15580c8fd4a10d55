use serde::Serialize;

use crate::model::{game::GameRef, snowflake};

/// A Discord role mirrored into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    #[serde(serialize_with = "snowflake::serialize")]
    pub id: u64,
    pub role_category_id: Option<i32>,
}

impl Role {
    pub fn from_entity(model: entity::role::Model) -> Self {
        Self {
            id: model.role_id as u64,
            role_category_id: model.role_category_id,
        }
    }
}

/// How to handle a role that disappeared from Discord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRemovalMode {
    /// Remove game mappings and delete the mirrored role row.
    Delete,
    /// Remove game mappings but keep the role row.
    UnmapOnly,
}

/// Outcome of processing a removed role.
///
/// `affected_games` is computed before anything is mutated, so it reflects
/// every game that was mapped to the role at the time of removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRemovalOutcome {
    NotFound,
    Removed {
        affected_games: Vec<GameRef>,
        mappings_removed: u64,
        record_deleted: bool,
    },
}

/// Net effect of one role synchronization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleSyncReport {
    #[serde(serialize_with = "snowflake::serialize_vec")]
    pub roles_created: Vec<u64>,
    #[serde(serialize_with = "snowflake::serialize_vec")]
    pub roles_deleted: Vec<u64>,
}
