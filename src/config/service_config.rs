//! Service Configuration - server, storage and geodetic settings as TOML
//!
//! Every section implements `Default`, so an empty or missing file yields a
//! working configuration.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a survey service deployment.
///
/// Load with `ServiceConfig::load()` which searches:
/// 1. `$SURVEY_CONFIG` env var
/// 2. `./survey_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub service: ServiceSection,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    /// Geodetic calculation options
    #[serde(default)]
    pub geodetic: GeodeticConfig,
}

impl ServiceConfig {
    /// Load configuration using the standard search order:
    /// 1. `$SURVEY_CONFIG` environment variable
    /// 2. `./survey_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), service = %config.service.name, "Loaded config from SURVEY_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from SURVEY_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "SURVEY_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(service = %config.service.name, "Loaded config from ./survey_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./survey_config.toml, using defaults");
                }
            }
        }

        info!("No survey_config.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    ///
    /// Unknown keys are logged as warnings; they never fail the load.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        for w in super::validation::validate_unknown_keys(&contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;

        for w in super::validation::validate_settings(&config) {
            warn!("{}", w);
        }
        Ok(config)
    }

    /// Apply `SURVEY_SERVER_ADDR` if set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var(defaults::SERVER_ADDR_ENV_VAR) {
            info!(addr = %addr, "Server address overridden by SURVEY_SERVER_ADDR");
            self.server.addr = addr;
        }
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Check every section and report all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.service.name.trim().is_empty() {
            errors.push("service.name: may not be empty".to_string());
        }

        if let Err(e) = self.server.addr.parse::<SocketAddr>() {
            errors.push(format!(
                "server.addr: '{}' is not a HOST:PORT socket address ({e})",
                self.server.addr
            ));
        }

        if !self.storage.temporary && self.storage.path.as_os_str().is_empty() {
            errors.push("storage.path: required unless storage.temporary = true".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSection {
    /// Name reported by `/health`.
    #[serde(default = "default_service_name")]
    pub name: String,
}

fn default_service_name() -> String {
    defaults::SERVICE_NAME.to_string()
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address.
    ///
    /// Can be overridden by `SURVEY_SERVER_ADDR` env var or `--addr` CLI flag.
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    defaults::SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// sled database directory.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,

    /// In-memory database, discarded on exit.
    #[serde(default)]
    pub temporary: bool,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(defaults::STORAGE_PATH)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            temporary: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeodeticConfig {
    /// Reject wells whose converted latitude exceeds ±90° or longitude ±180°.
    #[serde(default)]
    pub enforce_physical_range: bool,
}

// ============================================================================
// Tests
// ============================================================================
