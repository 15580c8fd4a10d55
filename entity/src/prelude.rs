pub use super::category::Entity as Category;
pub use super::game::Entity as Game;
pub use super::game_role::Entity as GameRole;
pub use super::game_tag::Entity as GameTag;
pub use super::role::Entity as Role;
pub use super::role_category::Entity as RoleCategory;
pub use super::server::Entity as Server;
pub use super::tag::Entity as Tag;
