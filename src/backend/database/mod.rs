//! Database layer for the roster server
//!
//! Every operation is a single parameterized statement executed against a
//! shared connection pool. Uniqueness conflicts are detected from the
//! database's constraint check, existence from the affected-row count.

pub mod config;
pub mod sqlite;

pub use config::DatabaseBackendConfig;
