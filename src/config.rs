use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Optional path to an external schema script. When absent, the bundled
    /// schema is used.
    #[serde(default)]
    pub schema: Option<String>,
}

fn default_max_connections() -> u32 {
    1
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, String> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(format!("Configuration file not found: {}", path.display()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        // Expand environment variables in YAML content
        let expanded_content = Self::expand_env_vars(&content)?;

        let app_config: AppConfig = serde_yaml::from_str(&expanded_content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))?;

        if app_config.database.url.is_empty() {
            return Err("Configuration must set a database url".to_string());
        }

        Ok(app_config)
    }

    /// Default configuration: in-memory SQLite, loopback listener
    pub fn default_config() -> Self {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: ":memory:".to_string(),
                max_connections: 1,
                schema: None,
            },
        }
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> Result<String, String> {
        let mut expanded = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find("${") {
            expanded.push_str(&rest[..start]);
            let tail = &rest[start + 2..];
            let end = tail
                .find('}')
                .ok_or_else(|| format!("Unclosed variable reference near: ${{{}", tail))?;
            let var_expr = &tail[..end];

            let (var_name, default_value) = match var_expr.find(":-") {
                Some(pos) => (&var_expr[..pos], Some(&var_expr[pos + 2..])),
                None => (var_expr, None),
            };

            match std::env::var(var_name) {
                Ok(value) => expanded.push_str(&value),
                Err(_) => match default_value {
                    Some(default) => expanded.push_str(default),
                    None => {
                        return Err(format!(
                            "Environment variable {} is not set and has no default",
                            var_name
                        ))
                    }
                },
            }

            rest = &tail[end + 1..];
        }

        expanded.push_str(rest);
        Ok(expanded)
    }
}
