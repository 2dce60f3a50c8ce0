//! SQLite storage implementation for navfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `navfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for holdings and transactions
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!     core (domain)        server (http)
//!           │                    │
//!           └─────────┬──────────┘
//!                     │
//!                     ▼
//!          storage-sqlite (this crate)
//!                     │
//!                     ▼
//!                 SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod holdings;
pub mod transactions;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use holdings::HoldingRepository;
pub use transactions::TransactionRepository;

// Re-export from navfolio-core for convenience
pub use navfolio_core::errors::{DatabaseError, Error, Result};
