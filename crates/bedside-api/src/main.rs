//! Bedside API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p bedside-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use bedside_common::{try_init_tracing_with_config, AppConfig, AppResult, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, code = e.error_code(), "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    // Load configuration (tracing is not up yet)
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        stale_timeout_ms = config.presence.stale_timeout_ms,
        "Configuration loaded"
    );

    // Run the server
    bedside_api::run(config).await?;

    Ok(())
}
