//! Product domain entity
//!
//! A product in the catalog. Construction always validates, so a `Product`
//! value that escapes this module satisfies every field rule.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::id::Id;

/// Validation failures, reported in precedence order (first failing rule wins).
///
/// `InvalidId` only comes out of `from_parts`: an `Id` value is always
/// well-formed once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("id is required")]
    IdRequired,

    #[error("invalid id")]
    InvalidId,

    #[error("name is required")]
    NameRequired,

    #[error("invalid price")]
    InvalidPrice,
}

/// A catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Id,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build a brand-new product with a fresh id and the current time
    pub fn create(name: impl Into<String>, price: f64) -> Result<Self, ProductError> {
        let product = Self {
            id: Id::new(),
            name: name.into(),
            price,
            created_at: Utc::now(),
        };

        product.validate()?;
        Ok(product)
    }

    /// Rebuild a product from untrusted parts, e.g. a path id plus a request body.
    ///
    /// The raw id is checked before anything else so that the precedence
    /// matches `validate`.
    pub fn from_parts(
        raw_id: &str,
        name: impl Into<String>,
        price: f64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ProductError> {
        if raw_id.trim().is_empty() {
            return Err(ProductError::IdRequired);
        }
        let id: Id = raw_id.parse().map_err(|_| ProductError::InvalidId)?;

        let product = Self {
            id,
            name: name.into(),
            price,
            created_at,
        };

        product.validate()?;
        Ok(product)
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_nil() {
            return Err(ProductError::IdRequired);
        }

        // Same rule as user names: whitespace alone is not a name
        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }

        // `!(x > 0)` also rejects NaN
        if !(self.price > 0.0) {
            return Err(ProductError::InvalidPrice);
        }

        Ok(())
    }

    /// Replace the mutable fields, keeping identity and creation time
    pub fn revise(&self, name: impl Into<String>, price: f64) -> Result<Self, ProductError> {
        let revised = Self {
            id: self.id,
            name: name.into(),
            price,
            created_at: self.created_at,
        };

        revised.validate()?;
        Ok(revised)
    }
}
