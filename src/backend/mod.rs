use crate::error::AppResult;
use crate::models::{NewGroup, NewMembership, NewUser};
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;

/// Core backend abstraction for the roster store.
///
/// Connection setup, health checking, and schema initialization. The schema
/// script runs exactly once per process, before any request handler is
/// reachable; a failure here must abort startup.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect and initialize the storage backend
    async fn connect(config: &database::DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Execute the schema script against the backend
    async fn init_schema(&self, schema_sql: &str) -> AppResult<()>;
}

/// User write operations.
///
/// Mutations report existence through their return value: inserts fail with
/// `AppError::Conflict` on a uniqueness violation, updates and deletes
/// return whether any row was affected.
#[async_trait]
pub trait UserStore: Backend {
    /// Insert a new user with a unique username and email
    async fn insert_user(&self, user: &NewUser) -> AppResult<()>;

    /// Set the email of an existing user; false if no such user
    async fn update_user_email(&self, user_id: i64, email: &str) -> AppResult<bool>;

    /// Delete a user; false if no such user
    async fn delete_user(&self, user_id: i64) -> AppResult<bool>;
}

/// Group write operations, mirroring [`UserStore`] with `group_name` as the
/// unique field.
#[async_trait]
pub trait GroupStore: Backend {
    /// Insert a new group with a unique name
    async fn insert_group(&self, group: &NewGroup) -> AppResult<()>;

    /// Rename an existing group; false if no such group
    async fn update_group_name(&self, group_id: i64, group_name: &str) -> AppResult<bool>;

    /// Delete a group; false if no such group
    async fn delete_group(&self, group_id: i64) -> AppResult<bool>;
}

/// Membership write operations. A (group_id, user_id) pair appears at most
/// once; the role rides along on the row.
#[async_trait]
pub trait MembershipStore: Backend {
    /// Insert a membership row for the given group
    async fn insert_membership(&self, group_id: i64, membership: &NewMembership)
        -> AppResult<()>;

    /// Delete the membership identified by (group_id, user_id); false if absent
    async fn delete_membership(&self, group_id: i64, user_id: i64) -> AppResult<bool>;
}

/// Combined backend interface for all three entities
pub trait RosterBackend: UserStore + GroupStore + MembershipStore {}

/// Automatic implementation for any type that implements all three stores
impl<T> RosterBackend for T where T: UserStore + GroupStore + MembershipStore {}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(
        config: &database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn RosterBackend>> {
        let backend = database::sqlite::SqliteBackend::connect(config).await?;
        Ok(Arc::new(backend))
    }
}
