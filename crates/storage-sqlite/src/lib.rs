//! SQLite storage implementation for the bond recommender.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the store traits defined in `bond-recommender-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with the `Store` / `StoreTx` traits.
//!
//! ```text
//!      core (domain, fetch, recommender)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!           SqliteStore ─► SqliteTx
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod store;
pub mod utils;

// Repository implementations
pub mod bonds;
pub mod collections;
pub mod issuers;
pub mod market_data;
pub mod offers;
pub mod payments;
pub mod reports;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export the store
pub use store::{SqliteStore, SqliteTx};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from bond-recommender-core for convenience
pub use bond_recommender_core::errors::{DatabaseError, Error, Result};
