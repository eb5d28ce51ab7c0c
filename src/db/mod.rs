//! Relational store for decoded records
//!
//! Diesel over SQLite with r2d2 connection pooling. One table, `dados`, with
//! one TEXT column per known field of the R10 layout.

pub mod database;
pub mod models;
pub mod schema;
pub mod store;

// Re-export key types
pub use database::{Database, DatabaseConfig, Pool, PooledConnection};
pub use models::{NewRecord, StoredRecord};
pub use schema::COLUMN_NAMES;
pub use store::{ImportOutcome, ImportReport, RecordStore, DEFAULT_DATABASE};
