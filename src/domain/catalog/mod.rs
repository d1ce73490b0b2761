//! Catalog module - Externally-owned reference entities.
//!
//! Users and items live with external collaborators (identity provider,
//! item catalog); the auction domain only references them by id.

mod item;
mod user;

pub use item::Item;
pub use user::User;
