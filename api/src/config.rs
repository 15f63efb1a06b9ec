use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context};

/// Longest accepted token lifetime: one year
const MAX_JWT_EXPIRES_IN: i64 = 365 * 24 * 60 * 60;

/// Token signing settings, loaded once and handed to whoever issues or verifies tokens
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub jwt_expires_in: i64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expires_in", &self.jwt_expires_in)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
    /// Requests replenished per second for each client IP
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| anyhow!("{} must be set", key));

        let jwt_expires_in: i64 = parse_or(&lookup, "JWT_EXPIRES_IN", 300)?;
        if !(1..=MAX_JWT_EXPIRES_IN).contains(&jwt_expires_in) {
            return Err(anyhow!(
                "JWT_EXPIRES_IN must be between 1 and {} seconds, got {}",
                MAX_JWT_EXPIRES_IN,
                jwt_expires_in
            ));
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parse_or(&lookup, "PORT", 8080)?,
            auth: AuthConfig {
                jwt_secret: required("JWT_SECRET")?,
                jwt_expires_in,
            },
            rate_limit_per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: parse_or(&lookup, "RATE_LIMIT_BURST", 50)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", key, raw)),
        None => Ok(default),
    }
}
