//! Read-only view of live guild state on Discord.
//!
//! The sync service talks to Discord through [`GuildDirectory`] so that tests
//! can substitute a fixed role list instead of a live API.

use std::sync::Arc;

use serenity::all::{GuildId, Permissions, UserId};
use serenity::http::{Http, HttpError};

use crate::error::CatalogError;

/// A role as it currently exists on Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRole {
    pub id: u64,
    pub name: String,
}

pub trait GuildDirectory {
    /// Whether the bot is installed in the guild.
    fn bot_in_guild(
        &self,
        server_id: u64,
    ) -> impl std::future::Future<Output = Result<bool, CatalogError>> + Send;

    /// Whether the user is a member of the guild.
    fn is_member(
        &self,
        server_id: u64,
        user_id: u64,
    ) -> impl std::future::Future<Output = Result<bool, CatalogError>> + Send;

    /// Whether the user can manage the guild (owner, administrator, or
    /// manage-guild permission).
    fn has_manage_permission(
        &self,
        server_id: u64,
        user_id: u64,
    ) -> impl std::future::Future<Output = Result<bool, CatalogError>> + Send;

    /// The guild's current roles, excluding `@everyone`.
    fn roles(
        &self,
        server_id: u64,
    ) -> impl std::future::Future<Output = Result<Vec<LiveRole>, CatalogError>> + Send;
}

/// [`GuildDirectory`] backed by the Discord REST API.
pub struct SerenityGuildDirectory {
    http: Arc<Http>,
}

impl SerenityGuildDirectory {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    pub fn from_token(token: &str) -> Self {
        Self::new(Arc::new(Http::new(token)))
    }
}

fn status_of(error: &serenity::Error) -> Option<u16> {
    match error {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            Some(response.status_code.as_u16())
        }
        _ => None,
    }
}

fn upstream(error: serenity::Error) -> CatalogError {
    CatalogError::Upstream(error.to_string())
}

impl GuildDirectory for SerenityGuildDirectory {
    async fn bot_in_guild(&self, server_id: u64) -> Result<bool, CatalogError> {
        match self.http.get_guild(GuildId::new(server_id)).await {
            Ok(_) => Ok(true),
            Err(e) if matches!(status_of(&e), Some(403) | Some(404)) => Ok(false),
            Err(e) => Err(upstream(e)),
        }
    }

    async fn is_member(&self, server_id: u64, user_id: u64) -> Result<bool, CatalogError> {
        match self
            .http
            .get_member(GuildId::new(server_id), UserId::new(user_id))
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if status_of(&e) == Some(404) => Ok(false),
            Err(e) => Err(upstream(e)),
        }
    }

    async fn has_manage_permission(
        &self,
        server_id: u64,
        user_id: u64,
    ) -> Result<bool, CatalogError> {
        let guild_id = GuildId::new(server_id);
        let guild = self.http.get_guild(guild_id).await.map_err(upstream)?;
        if guild.owner_id.get() == user_id {
            return Ok(true);
        }

        let member = match self.http.get_member(guild_id, UserId::new(user_id)).await {
            Ok(member) => member,
            Err(e) if status_of(&e) == Some(404) => return Ok(false),
            Err(e) => return Err(upstream(e)),
        };

        // Effective permissions are the union of @everyone (role ID equals
        // the guild ID) and the member's assigned roles.
        let roles = self
            .http
            .get_guild_roles(guild_id)
            .await
            .map_err(upstream)?;
        let mut permissions = Permissions::empty();
        for role in roles {
            if role.id.get() == server_id || member.roles.contains(&role.id) {
                permissions |= role.permissions;
            }
        }

        Ok(permissions.administrator() || permissions.manage_guild())
    }

    async fn roles(&self, server_id: u64) -> Result<Vec<LiveRole>, CatalogError> {
        let roles = self
            .http
            .get_guild_roles(GuildId::new(server_id))
            .await
            .map_err(upstream)?;

        Ok(roles
            .into_iter()
            .filter(|role| role.id.get() != server_id)
            .map(|role| LiveRole {
                id: role.id.get(),
                name: role.name,
            })
            .collect())
    }
}
