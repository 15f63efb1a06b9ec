//! SeaORM adapter for ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Select, Set,
};

use crate::domain::entities::{Id, Product};
use crate::domain::pagination::{PageRequest, SortOrder};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// Largest value SQL engines accept for LIMIT / OFFSET bind parameters
const MAX_BOUND: u64 = i64::MAX as u64;

/// SQL implementation of ProductRepository
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn ordered(query: Select<products::Entity>, sort: SortOrder) -> Select<products::Entity> {
    // id breaks ties between rows created in the same instant so pages stay stable
    match sort {
        SortOrder::Asc => query
            .order_by_asc(products::Column::CreatedAt)
            .order_by_asc(products::Column::Id),
        SortOrder::Desc => query
            .order_by_desc(products::Column::CreatedAt)
            .order_by_desc(products::Column::Id),
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn create(&self, product: &Product) -> Result<(), DomainError> {
        products::ActiveModel::from(product)
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &Id) -> Result<Product, DomainError> {
        products::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .map(Product::from)
            .ok_or_else(|| DomainError::NotFound(format!("Product {} not found", id)))
    }

    // Read-then-write without a transaction: a concurrent delete between the
    // two statements surfaces as a database error from the update.
    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        self.find_by_id(&product.id).await?;

        products::ActiveModel::from(product)
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &Id) -> Result<(), DomainError> {
        self.find_by_id(id).await?;

        products::Entity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> Result<Vec<Product>, DomainError> {
        let mut query = ordered(products::Entity::find(), page.sort);

        if page.is_paginated() {
            query = query
                .offset(page.offset().min(MAX_BOUND))
                .limit(page.limit.min(MAX_BOUND));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(Product::from).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: Id::from_uuid(model.id),
            name: model.name,
            price: model.price,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<&Product> for products::ActiveModel {
    fn from(product: &Product) -> Self {
        products::ActiveModel {
            id: Set(product.id.as_uuid()),
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: Set(product.created_at.fixed_offset()),
        }
    }
}
