//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod products;
pub mod users;

pub use products::{create_product, delete_product, get_product, list_products, update_product};
pub use users::{create_user, generate_token};
