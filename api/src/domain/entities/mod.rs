//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod id;
pub mod product;
pub mod user;

pub use id::Id;
pub use product::{Product, ProductError};
pub use user::{User, UserError};
