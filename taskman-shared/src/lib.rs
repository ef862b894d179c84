//! # Taskman Shared Library
//!
//! This crate contains the data layer shared by the taskman API server:
//! database pooling and schema bootstrap, entity models with their CRUD
//! operations, and password hashing.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and startup schema bootstrap
//! - `models`: Entity models (Task, User) and their database operations
//! - `auth`: Password hashing utilities

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the taskman shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
