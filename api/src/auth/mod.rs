//! Authentication
//!
//! - `jwt`: signing and verifying bearer tokens
//! - `bearer`: middleware guarding protected routes

pub mod bearer;
pub mod jwt;

pub use bearer::{auth_middleware, AuthenticatedUser};
pub use jwt::TokenIssuer;
