//! Configuration management for the Bookshelf presentation host

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote library API the catalog and user screens talk to
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub books_path: String,
    pub users_path: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding persisted preferences (theme, read and favorite books)
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (BOOKSHELF_<SECTION>__<KEY>)
            .add_source(environment())
            // Override remote API URL from BOOKSHELF_API_URL env var if present
            .set_override_option("api.base_url", env::var("BOOKSHELF_API_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl ApiConfig {
    /// Full URL of the book collection endpoint
    pub fn books_url(&self) -> String {
        join_url(&self.base_url, &self.books_path)
    }

    /// Full URL of a single user resource
    pub fn user_url(&self, id: &str) -> String {
        format!("{}/{}", join_url(&self.base_url, &self.users_path), id)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Environment source. Sections and keys are split on a double underscore
/// so that keys such as `timeout_secs` keep their own underscores.
fn environment() -> Environment {
    Environment::with_prefix("BOOKSHELF")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            books_path: "books".to_string(),
            users_path: "users".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/preferences.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> AppConfig {
        let source = environment().source(Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ));
        Config::builder()
            .add_source(source)
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_env_sets_multi_word_keys() {
        let config = from_vars(&[
            ("BOOKSHELF_API__TIMEOUT_SECS", "99"),
            ("BOOKSHELF_API__BOOKS_PATH", "catalog"),
            ("BOOKSHELF_STORAGE__PATH", "/tmp/prefs.json"),
            ("BOOKSHELF_SERVER__PORT", "4000"),
        ]);
        assert_eq!(config.api.timeout_secs, 99);
        assert_eq!(config.api.books_path, "catalog");
        assert_eq!(config.api.users_path, "users");
        assert_eq!(config.storage.path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_unrelated_env_vars_are_ignored() {
        let config = from_vars(&[("OTHER_API__TIMEOUT_SECS", "5"), ("BOOKSHELF_API_URL", "x")]);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_api_urls_join_cleanly() {
        let api = ApiConfig {
            base_url: "http://example.test/api/".to_string(),
            books_path: "/books".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.books_url(), "http://example.test/api/books");
        assert_eq!(api.user_url("42"), "http://example.test/api/users/42");
    }
}
