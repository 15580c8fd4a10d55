use serde::Serialize;

use crate::model::{category::Category, role::Role, tag::Tag};

/// Minimal reference to a game, used in deletion refusals and removal
/// reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRef {
    pub id: i32,
    pub name: String,
}

/// A game with its category, tags, and mapped roles resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub tags: Vec<Tag>,
    pub roles: Vec<Role>,
}

pub struct CreateGameParams {
    pub server_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
}

/// Sparse update to a game. Each field distinguishes "leave unchanged"
/// (outer `None`) from "set" — and for nullable columns, "set" from "clear"
/// (inner `None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category_id: Option<Option<i32>>,
}

impl GameChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.category_id.is_none()
    }
}

/// Full replacement of a game's fields plus its tag and role sets.
pub struct ReplaceGameParams {
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub tag_ids: Vec<i32>,
    pub role_ids: Vec<u64>,
}
