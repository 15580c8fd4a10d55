use serde::Serialize;

use crate::model::{
    category::Category, game::GameSummary, role::Role, role_category::RoleCategory, snowflake,
    tag::Tag,
};

/// Everything a server's catalog contains, in one shape.
///
/// Empty collections serialize as `[]`, never as null, so clients can iterate
/// without null checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSnapshot {
    #[serde(serialize_with = "snowflake::serialize")]
    pub server_id: u64,
    pub roles: Vec<Role>,
    pub role_categories: Vec<RoleCategory>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub games: Vec<GameSummary>,
}
