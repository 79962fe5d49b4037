//! SQLite storage implementation for ratehub.
//!
//! This crate provides all database-related functionality using Diesel with
//! SQLite. It implements the repository traits defined in `ratehub-core` and
//! contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for currencies and exchange rates
//! - Database-specific row types (with Diesel derives)
//!
//! This is the only crate in the workspace where Diesel dependencies exist;
//! `core` and the server are database-agnostic and work with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod currencies;
pub mod fx;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from ratehub-core for convenience
pub use ratehub_core::errors::{DatabaseError, Error, Result};
