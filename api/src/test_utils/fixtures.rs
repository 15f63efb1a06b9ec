//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, SubsecRound, Utc};

use crate::config::AuthConfig;
use crate::domain::entities::{Id, Product, User};

pub const TEST_PASSWORD: &str = "123456";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Create a valid product with whole-second timestamps (survives any storage round trip)
pub fn test_product() -> Product {
    test_product_named("Product 1")
}

pub fn test_product_named(name: &str) -> Product {
    test_product_created_at(name, Utc::now().trunc_subsecs(0))
}

/// Create a product with a fixed creation time, for ordering tests
pub fn test_product_created_at(name: &str, created_at: DateTime<Utc>) -> Product {
    Product::from_parts(&Id::new().to_string(), name, 10.0, created_at)
        .expect("fixture product must be valid")
}

/// Create a user whose password is `TEST_PASSWORD`
pub fn test_user() -> User {
    test_user_with_email("rafael@gmail.com")
}

pub fn test_user_with_email(email: &str) -> User {
    User::create("Rafael", email, TEST_PASSWORD).expect("fixture user must be valid")
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expires_in: 300,
    }
}
