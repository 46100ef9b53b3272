/// Configuration for the database backend
///
/// Holds everything needed to open the shared connection pool. Built from
/// the application config at startup and handed to the backend factory.
#[derive(Debug, Clone)]
pub struct DatabaseBackendConfig {
    /// Connection URL, e.g. "sqlite:./roster.db" or ":memory:"
    pub connection_url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

impl DatabaseBackendConfig {
    /// Create a new database configuration
    pub fn new(connection_url: String) -> Self {
        Self {
            connection_url,
            max_connections: 1,
        }
    }

    /// Create an in-memory configuration for testing
    pub fn memory() -> Self {
        Self::new(":memory:".to_string())
    }

    /// Set maximum connections
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Check if this is an in-memory database
    pub fn is_memory_database(&self) -> bool {
        self.connection_url == ":memory:"
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.connection_url.is_empty() {
            return Err("Connection URL cannot be empty".to_string());
        }

        if self.max_connections == 0 {
            return Err("Max connections must be greater than 0".to_string());
        }

        if !self.connection_url.starts_with("sqlite:")
            && self.connection_url != ":memory:"
            && !self.connection_url.ends_with(".db")
            && !self.connection_url.ends_with(".sqlite")
        {
            return Err(
                "Connection URL must start with 'sqlite:', be ':memory:', or end with '.db' or '.sqlite'"
                    .to_string(),
            );
        }

        Ok(())
    }
}

impl Default for DatabaseBackendConfig {
    fn default() -> Self {
        Self::memory()
    }
}
