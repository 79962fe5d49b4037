//! Ratehub Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the currency-exchange
//! reference service. It is database-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod currencies;
pub mod errors;
pub mod fx;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
