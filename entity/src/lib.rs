//! SeaORM entity definitions for the game catalog schema.
//!
//! Every table is scoped to a `server` (one Discord guild); the join tables
//! `game_tag` and `game_role` carry set-membership facts between games and
//! tags/roles. External Discord IDs (servers, roles) are stored as `i64`
//! columns, internal surrogate keys as `i32`.

pub mod category;
pub mod game;
pub mod game_role;
pub mod game_tag;
pub mod prelude;
pub mod role;
pub mod role_category;
pub mod server;
pub mod tag;
