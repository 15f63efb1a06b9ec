//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the token issuer.

pub mod product_service;
pub mod user_service;

pub use product_service::ProductService;
pub use user_service::UserService;
