//! Entity identifier
//!
//! Opaque, randomly generated identifier shared by every entity. The textual
//! form is the canonical dashed-hex UUID representation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Returned when text is not a canonical identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

/// Unique identifier for products and users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
    ///
    /// The uuid crate also accepts braced, URN and undashed spellings; those
    /// are rejected here so that every stored id has exactly one text form.
    pub fn parse(text: &str) -> Result<Self, InvalidIdentifier> {
        let invalid = || InvalidIdentifier(text.to_string());

        if text.len() != 36 {
            return Err(invalid());
        }

        Uuid::try_parse(text).map(Self).map_err(|_| invalid())
    }

    /// The all-zero identifier, which no entity may carry
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub(crate) fn as_uuid(&self) -> Uuid {
        self.0
    }

    pub(crate) fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Id {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(Id::new(), Id::new());
    }

    #[test]
    fn display_parses_back() {
        let id = Id::new();
        assert_eq!(Id::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn display_is_canonical_dashed_hex() {
        let id = Id::from_uuid(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
        assert!(id.is_nil());
    }

    #[test]
    fn parse_rejects_non_canonical_shapes() {
        let id = Id::new();
        let simple = id.as_uuid().simple().to_string();
        let braced = format!("{{{}}}", id);

        assert!(Id::parse("").is_err());
        assert!(Id::parse("not-an-id").is_err());
        assert!(Id::parse(&simple).is_err());
        assert!(Id::parse(&braced).is_err());
        assert!(Id::parse("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let id = Id::new();
        assert_eq!(id.to_string().parse::<Id>().unwrap(), id);
        assert!("123".parse::<Id>().is_err());
    }
}
