//! User service
//!
//! Handles account registration and login (token issuance).

use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::domain::entities::User;
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

/// Service for managing users and issuing tokens
pub struct UserService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenIssuer>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenIssuer>) -> Self {
        Self { users, tokens }
    }

    /// Register a new user
    ///
    /// Storage failures keep their message (`AppError::StorageExposed`) so the
    /// caller can see e.g. a duplicate email.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        let user = tokio::task::spawn_blocking(move || User::create(name, email, &password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(DomainError::from)?;

        self.users.create(&user).await.map_err(|e| match e {
            DomainError::Database(msg) => AppError::StorageExposed(msg),
            e => AppError::Domain(e),
        })?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Check credentials and issue a bearer token
    pub async fn issue_token(&self, email: &str, password: String) -> Result<String, AppError> {
        let user = self.users.find_by_email(email).await?;
        let user_id = user.id;

        let valid = tokio::task::spawn_blocking(move || user.validate_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password check task failed: {}", e)))?;

        if !valid {
            tracing::warn!(user_id = %user_id, "Login rejected: wrong password");
            return Err(DomainError::Unauthorized("invalid credentials".to_string()).into());
        }

        let token = self.tokens.issue(&user_id)?;
        tracing::info!(user_id = %user_id, "Token issued");

        Ok(token)
    }
}
