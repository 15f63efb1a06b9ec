//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Id, Product, User};
use crate::domain::pagination::PageRequest;
use crate::error::DomainError;

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a validated product
    async fn create(&self, product: &Product) -> Result<(), DomainError>;

    /// Find a product by ID, `NotFound` when absent
    async fn find_by_id(&self, id: &Id) -> Result<Product, DomainError>;

    /// Replace every stored field of an existing product.
    ///
    /// Implementations must check existence first and fail with `NotFound`
    /// rather than inserting a new row.
    async fn update(&self, product: &Product) -> Result<(), DomainError>;

    /// Remove an existing product, `NotFound` when absent
    async fn delete(&self, id: &Id) -> Result<(), DomainError>;

    /// List products ordered by `created_at`
    async fn find_all(&self, page: PageRequest) -> Result<Vec<Product>, DomainError>;
}

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; duplicate emails are rejected by storage
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by email, `NotFound` when absent
    async fn find_by_email(&self, email: &str) -> Result<User, DomainError>;
}
