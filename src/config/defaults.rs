//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Configuration file
// ============================================================================

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SURVEY_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "survey_config.toml";

// ============================================================================
// Service
// ============================================================================

pub const SERVICE_NAME: &str = "well-survey";

// ============================================================================
// HTTP server
// ============================================================================

pub const SERVER_ADDR: &str = "0.0.0.0:8080";

/// Overrides `[server] addr`; `--addr` overrides both.
pub const SERVER_ADDR_ENV_VAR: &str = "SURVEY_SERVER_ADDR";

/// Comma-separated list of allowed CORS origins.
pub const CORS_ORIGINS_ENV_VAR: &str = "SURVEY_CORS_ORIGINS";

/// API version reported in response metadata.
pub const API_VERSION: &str = "1";

// ============================================================================
// Storage
// ============================================================================

pub const STORAGE_PATH: &str = "./data/survey.db";

/// Set to `true` to wipe the database on startup.
pub const RESET_DB_ENV_VAR: &str = "RESET_DB";
