//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use mockall::mock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Id, Product, User};
use crate::domain::pagination::{PageRequest, SortOrder};
use crate::domain::ports::{ProductRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Product Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Id, Product>>>,
    writes: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        self.products.write().unwrap().insert(product.id, product);
        self
    }

    /// Number of successful create/update/delete calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.products.read().unwrap().len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> Result<(), DomainError> {
        let mut products = self.products.write().unwrap();
        if products.contains_key(&product.id) {
            return Err(DomainError::Database(format!(
                "duplicate product id {}",
                product.id
            )));
        }

        products.insert(product.id, product.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn find_by_id(&self, id: &Id) -> Result<Product, DomainError> {
        let products = self.products.read().unwrap();
        products
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Product {} not found", id)))
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        self.find_by_id(&product.id).await?;

        let mut products = self.products.write().unwrap();
        products.insert(product.id, product.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, id: &Id) -> Result<(), DomainError> {
        self.find_by_id(id).await?;

        let mut products = self.products.write().unwrap();
        products.remove(id);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> Result<Vec<Product>, DomainError> {
        let mut ordered: Vec<Product> = self.products.read().unwrap().values().cloned().collect();

        ordered.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        if page.sort == SortOrder::Desc {
            ordered.reverse();
        }

        Ok(page.slice(ordered))
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    by_email: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.by_email
            .write()
            .unwrap()
            .insert(user.email.clone(), user);
        self
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.by_email.read().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let mut by_email = self.by_email.write().unwrap();
        if by_email.contains_key(&user.email) {
            return Err(DomainError::Database(
                "UNIQUE constraint failed: users.email".to_string(),
            ));
        }

        by_email.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.get(email)
            .ok_or_else(|| DomainError::NotFound(format!("User with email {} not found", email)))
    }
}

// ============================================================================
// mockall mocks (for injecting storage failures)
// ============================================================================

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn create(&self, product: &Product) -> Result<(), DomainError>;
        async fn find_by_id(&self, id: &Id) -> Result<Product, DomainError>;
        async fn update(&self, product: &Product) -> Result<(), DomainError>;
        async fn delete(&self, id: &Id) -> Result<(), DomainError>;
        async fn find_all(&self, page: PageRequest) -> Result<Vec<Product>, DomainError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn create(&self, user: &User) -> Result<(), DomainError>;
        async fn find_by_email(&self, email: &str) -> Result<User, DomainError>;
    }
}
