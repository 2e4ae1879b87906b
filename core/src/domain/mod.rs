//! Domain layer
//!
//! Contains pure business types with no knowledge of storage.
//! - `entities`: Organizations and the pets they list
//! - `ports`: Trait definitions for persistence and password hashing

pub mod entities;
pub mod ports;
