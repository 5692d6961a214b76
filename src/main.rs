//! Well Survey - job tracking service for directional survey crews
//!
//! Serves the survey registry over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Run with ./survey_config.toml or built-in defaults
//! cargo run --release
//!
//! # Scratch instance with an in-memory database
//! ./well-survey --temporary --addr 127.0.0.1:9000
//! ```
//!
//! # Environment Variables
//!
//! - `SURVEY_CONFIG`: Path to the TOML config file
//! - `SURVEY_SERVER_ADDR`: Bind address (overridden by `--addr`)
//! - `SURVEY_CORS_ORIGINS`: Comma-separated allowed CORS origins
//! - `RUST_LOG`: Logging level (default: info)
//! - `RESET_DB`: Set to "true" to wipe the database on startup (for testing)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use well_survey::api::{create_app, ApiState};
use well_survey::config::{self, defaults, ServiceConfig};
use well_survey::{Registry, Store};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "well-survey")]
#[command(about = "Well survey job tracking service")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Config file to load instead of the standard search order
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for the database (default: ./data)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Use an in-memory database; nothing is written to disk
    #[arg(long)]
    temporary: bool,

    /// Wipe the survey database on startup.
    /// WARNING: This is destructive and cannot be undone!
    /// Can also be set via RESET_DB=true environment variable.
    #[arg(long)]
    reset_db: bool,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

// ============================================================================
// Configuration
// ============================================================================

/// Load config, then apply env and CLI overrides in that order.
fn resolve_config(args: &CliArgs) -> Result<ServiceConfig> {
    let mut service_config = match &args.config {
        Some(path) => ServiceConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ServiceConfig::load(),
    };

    service_config.apply_env_overrides();

    if let Some(addr) = &args.addr {
        service_config.server.addr.clone_from(addr);
    }
    if let Some(dir) = &args.data_dir {
        let file_name = service_config
            .storage
            .path
            .file_name()
            .map_or_else(|| PathBuf::from("survey.db"), PathBuf::from);
        service_config.storage.path = dir.join(file_name);
    }
    if args.temporary {
        service_config.storage.temporary = true;
    }

    service_config
        .validate()
        .context("Invalid configuration after applying overrides")?;
    Ok(service_config)
}

// ============================================================================
// Database Reset
// ============================================================================

/// Check if database reset is requested via CLI flag or environment variable.
fn should_reset_db(cli_flag: bool) -> bool {
    if cli_flag {
        return true;
    }
    if let Ok(val) = std::env::var(defaults::RESET_DB_ENV_VAR) {
        let val_lower = val.to_lowercase();
        return val_lower == "true" || val_lower == "1" || val_lower == "yes";
    }
    false
}

/// Clear every table in an open database.
fn reset_database(store: &Store) -> Result<()> {
    warn!("RESET_DB requested: wiping survey database");
    let trees = store.reset().context("Failed to reset database")?;
    warn!(trees, "Database cleared; starting from empty tables");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let resolved = resolve_config(&args)?;
    if args.print_config {
        print!("{}", resolved.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    config::init(resolved);
    let service_config = config::get().clone();

    info!(
        service = %service_config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting well survey service"
    );

    let store = if service_config.storage.temporary {
        if should_reset_db(args.reset_db) {
            info!("Temporary storage: nothing to reset");
        }
        Store::temporary().context("Failed to open temporary storage")?
    } else {
        // sled's file lock stops a second instance here
        let store = Store::open(&service_config.storage.path).with_context(|| {
            format!(
                "Failed to open database at {} (another well-survey instance may hold it)",
                service_config.storage.path.display()
            )
        })?;

        if should_reset_db(args.reset_db) {
            reset_database(&store)?;
        }
        store
    };

    let enforce_range = service_config.geodetic.enforce_physical_range;
    if enforce_range {
        info!("Physical range check enabled for well coordinates");
    }
    let registry = Registry::new(store.clone()).with_physical_range_check(enforce_range);

    let listener = tokio::net::TcpListener::bind(&service_config.server.addr)
        .await
        .with_context(|| format!("Failed to bind {}", service_config.server.addr))?;
    info!(addr = %service_config.server.addr, "HTTP server listening");

    let app = create_app(ApiState::new(registry, service_config));

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await;

    if let Err(e) = store.flush() {
        error!("Failed to flush database on shutdown: {}", e);
    }

    result.context("HTTP server error")?;
    info!("Well survey service shutdown complete");
    Ok(())
}
