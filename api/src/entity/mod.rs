//! SeaORM entity definitions
//!
//! Table-level models. Domain code never sees these; the SQL adapters map
//! them to and from `domain::entities`.

pub mod products;
pub mod users;
