//! Product service
//!
//! Product use cases: validation through the entity, existence checks, and
//! delegation to the repository.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{Id, Product};
use crate::domain::pagination::PageRequest;
use crate::domain::ports::ProductRepository;
use crate::error::{AppError, DomainError};

/// Service for managing products
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Validate and persist a new product
    pub async fn create(&self, name: String, price: f64) -> Result<Product, AppError> {
        let product = Product::create(name, price).map_err(DomainError::from)?;

        self.products.create(&product).await?;
        tracing::info!(product_id = %product.id, "Product created");

        Ok(product)
    }

    pub async fn get(&self, id: &Id) -> Result<Product, AppError> {
        Ok(self.products.find_by_id(id).await?)
    }

    /// Replace name and price of the product at `raw_id`.
    ///
    /// Steps, each with its own failure:
    /// 1. the id and the new fields are validated (`Validation`)
    /// 2. the product must exist (`NotFound`)
    /// 3. the full record is written (`Database`)
    ///
    /// `created_at` is carried over from the stored record.
    pub async fn update(&self, raw_id: &str, name: String, price: f64) -> Result<Product, AppError> {
        let candidate =
            Product::from_parts(raw_id, name, price, Utc::now()).map_err(DomainError::from)?;

        let existing = self.products.find_by_id(&candidate.id).await?;
        let revised = existing
            .revise(candidate.name, candidate.price)
            .map_err(DomainError::from)?;

        self.products.update(&revised).await?;
        tracing::info!(product_id = %revised.id, "Product updated");

        Ok(revised)
    }

    pub async fn delete(&self, id: &Id) -> Result<(), AppError> {
        self.products.find_by_id(id).await?;
        self.products.delete(id).await?;
        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }

    pub async fn list(&self, page: PageRequest) -> Result<Vec<Product>, AppError> {
        Ok(self.products.find_all(page).await?)
    }
}
