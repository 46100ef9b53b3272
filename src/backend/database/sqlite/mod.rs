use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::DatabaseBackendConfig;
use crate::backend::Backend;
use crate::error::{AppError, AppResult};

pub mod schema;

mod groups;
mod memberships;
mod users;

/// SQLite backend over a shared `sqlx` connection pool.
///
/// Foreign key enforcement is switched on for every pooled connection, so
/// membership rows always reference live users and groups, and deleting
/// either side cascades to its memberships.
pub struct SqliteBackend {
    pool: SqlitePool,
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.connection_url)
            .map_err(|e| {
                AppError::Configuration(format!(
                    "Invalid SQLite URL {}: {}",
                    config.connection_url, e
                ))
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open SQLite pool: {}", e)))?;

        Ok(Self { pool })
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    async fn init_schema(&self, schema_sql: &str) -> AppResult<()> {
        sqlx::raw_sql(schema_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Schema script failed: {}", e)))?;
        Ok(())
    }
}

/// Map a failed statement to the error taxonomy. A uniqueness violation
/// becomes a conflict carrying the per-entity detail; anything else stays a
/// database error.
pub(crate) fn map_constraint_error(error: sqlx::Error, conflict_detail: &str) -> AppError {
    let error_str = error.to_string();
    if error_str.contains("UNIQUE constraint") {
        AppError::Conflict(conflict_detail.to_string())
    } else {
        AppError::Database(format!("Statement failed: {}", error_str))
    }
}

#[cfg(test)]
pub(super) async fn connect_test_backend() -> SqliteBackend {
    let backend = SqliteBackend::connect(&DatabaseBackendConfig::memory())
        .await
        .unwrap();
    backend.init_schema(schema::DEFAULT_SCHEMA).await.unwrap();
    backend
}
