use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

impl Tag {
    pub fn from_entity(model: entity::tag::Model) -> Self {
        Self {
            id: model.tag_id,
            name: model.name,
        }
    }
}
