//! Database connection management
//!
//! Diesel SQLite connections behind an r2d2 pool. The pool is opened once per
//! load run and closed when the `Database` is dropped.

use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;

use crate::error::StoreError;

pub type DbConnection = SqliteConnection;
pub type Pool = r2d2::Pool<ConnectionManager<DbConnection>>;
pub type PooledConnection = r2d2::PooledConnection<ConnectionManager<DbConnection>>;

/// Database connection pool manager
pub struct Database {
    pool: Pool,
}

impl Database {
    /// Open (creating if needed) a SQLite database file.
    ///
    /// # Example
    /// ```ignore
    /// let db = Database::new("dados.sqlite3")?;
    /// ```
    pub fn new(database_url: &str) -> Result<Self, StoreError> {
        Self::new_with_config(database_url, DatabaseConfig::default())
    }

    /// Open a database with custom pool configuration.
    ///
    /// Fails when the first connection cannot be established.
    pub fn new_with_config(database_url: &str, config: DatabaseConfig) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<DbConnection>::new(database_url);

        let pool = r2d2::Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(config.min_idle))
            .connection_timeout(Duration::from_secs(config.connection_timeout_secs))
            .build(manager)
            .map_err(|source| StoreError::Connection {
                url: database_url.to_string(),
                source,
            })?;

        Ok(Database { pool })
    }

    /// Get a connection from the pool
    pub fn get_connection(&self) -> Result<PooledConnection, StoreError> {
        Ok(self.pool.get()?)
    }

    /// Test database connectivity
    pub fn test_connection(&self) -> Result<(), StoreError> {
        let mut conn = self.get_connection()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    }
}

/// Database configuration options
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub min_idle: u32,
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            max_connections: 1,          // Loads are single-threaded
            min_idle: 1,                 // Connect eagerly so failures surface on open
            connection_timeout_secs: 5,
        }
    }
}
