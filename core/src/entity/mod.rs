//! SeaORM entities
//!
//! Table mappings for the PostgreSQL adapters. Schema management lives outside
//! this crate.

pub mod organizations;
pub mod pets;
