//! Domain models returned by the data and service layers.
//!
//! These are the types the web and bot surfaces see; SeaORM entity models
//! never leave the repository layer. Discord snowflake IDs are `u64` here and
//! serialize as decimal strings so they survive JSON number precision limits.

pub mod category;
pub mod game;
pub mod role;
pub mod role_category;
pub mod server;
pub mod snowflake;
pub mod tag;

/// Outcome of creating a row that carries a uniqueness constraint.
///
/// A duplicate is a normal answer for these entities, not a failure, so it is
/// reported in the return value rather than as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inserted<T> {
    Created(T),
    /// An equivalent row already existed; nothing was written.
    AlreadyExists,
}

impl<T> Inserted<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, Inserted::Created(_))
    }
}
