//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `pagination`: The listing contract shared by ports and handlers
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod pagination;
pub mod ports;
