//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. PostgreSQL in
//! production; the same code runs against SQLite for tests and local use.

pub mod product_repo;
pub mod schema;
pub mod user_repo;


pub use product_repo::SqlProductRepository;
pub use schema::ensure_schema;
pub use user_repo::SqlUserRepository;
