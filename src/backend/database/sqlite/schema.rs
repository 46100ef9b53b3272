//! Bundled roster schema.

/// Default schema script, compiled into the binary. An external script can
/// be supplied through the `database.schema` config key instead; either way
/// the script runs exactly once at startup.
pub const DEFAULT_SCHEMA: &str = include_str!("../../../../sql/schema.sql");
