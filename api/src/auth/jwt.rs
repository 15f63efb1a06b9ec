//! JWT issuance and verification
//!
//! Tokens are HS256-signed. The payload binds the user id as `sub` and an
//! absolute expiry `exp` of issue time plus the configured TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::entities::Id;
use crate::error::DomainError;

/// Bearer token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Expiry, seconds since the epoch
    pub exp: i64,
    /// Issued at, seconds since the epoch
    pub iat: i64,
}

/// Signs and verifies bearer tokens with the process-wide secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        // No clock skew allowance: a token is dead the second `exp` passes
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl_seconds: config.jwt_expires_in,
        }
    }

    /// Issue a token for `subject`, valid from now for the configured TTL
    pub fn issue(&self, subject: &Id) -> Result<String, DomainError> {
        self.issue_at(subject, Utc::now())
    }

    pub fn issue_at(&self, subject: &Id, now: DateTime<Utc>) -> Result<String, DomainError> {
        let expires_at = Duration::try_seconds(self.ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "Token lifetime of {}s is out of range",
                    self.ttl_seconds
                ))
            })?;

        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| DomainError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Check signature and expiry, returning the payload
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::Unauthorized(e.to_string()))
    }
}
