use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCategory {
    pub id: i32,
    pub name: String,
}

impl RoleCategory {
    pub fn from_entity(model: entity::role_category::Model) -> Self {
        Self {
            id: model.role_category_id,
            name: model.name,
        }
    }
}

/// Outcome of deleting a role category. Refused while roles still reference
/// it; the blocking role IDs come back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCategoryDeletion {
    Deleted,
    NotFound,
    Blocked { roles: Vec<u64> },
}
