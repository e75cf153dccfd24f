//! Server configuration
//!
//! Read once at startup. `from_lookup` takes the variable source as a
//! closure so tests can feed a map instead of the process environment.

use std::env;
use std::net::IpAddr;

use anyhow::{Context, bail};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Where users are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    Postgres { database_url: String },
    /// Process-local table, lost on restart
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: Storage,
    pub host: IpAddr,
    pub port: u16,
    pub db_max_connections: u32,
    pub frontend_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storage = match lookup("STORAGE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => {
                let database_url = lookup("DATABASE_URL")
                    .filter(|url| !url.trim().is_empty())
                    .context("DATABASE_URL must be set when STORAGE=postgres")?;
                Storage::Postgres { database_url }
            }
            Some("memory") => Storage::Memory,
            Some(other) => bail!("STORAGE must be `postgres` or `memory`, got `{other}`"),
        };

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("HOST is not an IP address: `{raw}`"))?,
            None => DEFAULT_HOST.parse()?,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a port number: `{raw}`"))?,
            None => DEFAULT_PORT,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS is not a number: `{raw}`"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if db_max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            storage,
            host,
            port,
            db_max_connections,
            frontend_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/users")]).unwrap();

        assert_eq!(
            config.storage,
            Storage::Postgres {
                database_url: "postgres://localhost/users".to_string()
            }
        );
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(
            config.frontend_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn test_database_url_required_for_postgres() {
        assert!(config(&[]).is_err());
        assert!(config(&[("STORAGE", "postgres"), ("DATABASE_URL", " ")]).is_err());
    }

    #[test]
    fn test_memory_storage_needs_no_database() {
        let config = config(&[("STORAGE", "memory")]).unwrap();
        assert_eq!(config.storage, Storage::Memory);
    }

    #[test]
    fn test_unknown_storage_is_rejected() {
        let err = config(&[("STORAGE", "sqlite")]).unwrap_err();
        assert!(err.to_string().contains("sqlite"));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("STORAGE", "memory"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("FRONTEND_ORIGINS", " https://a.example , ,https://b.example"),
        ])
        .unwrap();

        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(config(&[("STORAGE", "memory"), ("PORT", "http")]).is_err());
        assert!(config(&[("STORAGE", "memory"), ("PORT", "70000")]).is_err());
        assert!(config(&[("STORAGE", "memory"), ("DB_MAX_CONNECTIONS", "0")]).is_err());
    }
}
