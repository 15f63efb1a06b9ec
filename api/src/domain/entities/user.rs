//! User domain entity
//!
//! A user account. The password is hashed with Argon2 at construction and
//! only the PHC-formatted digest is ever kept.

use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

use super::id::Id;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("name is required")]
    NameRequired,

    #[error("email is required")]
    EmailRequired,

    #[error("password is required")]
    PasswordRequired,

    #[error("failed to hash password: {0}")]
    PasswordHash(String),
}

impl UserError {
    /// Whether the caller supplied bad input, as opposed to an internal failure
    pub fn is_validation(&self) -> bool {
        !matches!(self, UserError::PasswordHash(_))
    }
}

/// A registered user
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
    password: String,
}

impl User {
    /// Create a new user, hashing `password` with a random salt.
    ///
    /// Hashing is deliberately slow; call from a blocking context when on
    /// an async runtime.
    pub fn create(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> Result<Self, UserError> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(UserError::NameRequired);
        }
        if email.trim().is_empty() {
            return Err(UserError::EmailRequired);
        }
        if password.is_empty() {
            return Err(UserError::PasswordRequired);
        }

        let salt = SaltString::generate(&mut OsRng);
        let password = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Self {
            id: Id::new(),
            name,
            email,
            password,
        })
    }

    /// Rehydrate a user from storage; `password_hash` must already be a digest
    pub(crate) fn restore(id: Id, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password: password_hash,
        }
    }

    pub fn password_hash(&self) -> &str {
        &self.password
    }

    /// Check a candidate password against the stored digest.
    ///
    /// The Argon2 verifier compares digests in constant time. A stored value
    /// that is not a valid PHC string never matches.
    pub fn validate_password(&self, candidate: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password) else {
            return false;
        };

        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
