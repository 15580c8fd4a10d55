use serde::Serialize;

use crate::model::game::GameRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn from_entity(model: entity::category::Model) -> Self {
        Self {
            id: model.category_id,
            name: model.name,
        }
    }
}

/// Outcome of deleting a category.
///
/// Deletion is refused while games still reference the category; the caller
/// gets the exact blocking set so it can be surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryDeletion {
    Deleted,
    NotFound,
    Blocked { games: Vec<GameRef> },
}
