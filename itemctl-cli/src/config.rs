//! Configuration for the itemctl binary
//!
//! Precedence (highest first): command-line flags, environment
//! (including `.env` files), `~/.itemctl/config.toml`, built-in defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use itemctl_server::db::DEFAULT_MAX_CONNECTIONS;
use itemctl_server::http::DEFAULT_PORT;

/// Database used when nothing else is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./sql_app.db";

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemctlConfig {
    pub log_level: Option<String>,
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl ItemctlConfig {
    /// Load config from an explicit path, or `~/.itemctl/config.toml` if it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))?;

        Ok(config)
    }

    /// Get config file path: ~/.itemctl/config.toml
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Database URL from file or default.
    pub fn database_url(&self) -> String {
        self.database
            .url
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }

    pub fn max_connections(&self) -> u32 {
        self.database.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    pub fn bind(&self) -> SocketAddr {
        self.server
            .bind
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)))
    }

    pub fn cors_permissive(&self) -> bool {
        self.server.cors_permissive.unwrap_or(false)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

/// Get the itemctl config directory path (~/.itemctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".itemctl"))
}

/// Load environment variables from `.env` files.
///
/// The current directory wins over `~/.itemctl/.env`; neither overrides
/// variables already set in the process environment.
pub fn load_dotenv() {
    // Runs before tracing is initialized, so failures are not reported
    dotenvy::dotenv().ok();

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            dotenvy::from_path(&env_file).ok();
        }
    }
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show the resolved configuration as TOML
    Show,
}

pub fn run_config(args: ConfigArgs, config: &ItemctlConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            let path = ItemctlConfig::config_path().context("Could not determine home directory")?;
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            let resolved = ItemctlConfig {
                log_level: Some(config.log_level().to_string()),
                server: ServerSection {
                    bind: Some(config.bind()),
                    cors_permissive: Some(config.cors_permissive()),
                },
                database: DatabaseSection {
                    url: Some(config.database_url()),
                    max_connections: Some(config.max_connections()),
                },
            };
            let toml_str =
                toml::to_string_pretty(&resolved).context("Failed to serialize config to TOML")?;
            print!("{}", toml_str);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_empty() {
        let config = ItemctlConfig::default();
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections(), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.bind().port(), DEFAULT_PORT);
        assert!(!config.cors_permissive());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn parses_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"

[server]
bind = "0.0.0.0:9000"

[database]
url = "sqlite://items.db"
"#
        )
        .unwrap();

        let config = ItemctlConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.bind(), "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_url(), "sqlite://items.db");
        assert_eq!(config.max_connections(), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ItemctlConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn invalid_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nbind = 1").unwrap();
        let err = ItemctlConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }
}
