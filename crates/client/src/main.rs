//! Higher/lower game client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (game progression) via RuntimeBuilder
//! 2. Frontend (UI) - terminal
//!
//! # Examples
//!
//! ```bash
//! # Play against the hosted API
//! cargo run -p higher-lower-client
//!
//! # Play offline from the bundled catalog
//! HIGHER_LOWER_OFFLINE=1 cargo run -p higher-lower-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{BootstrapConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use higher_lower_client::Client;

    // 1. Load configuration from environment
    let bootstrap_config = BootstrapConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (guard flushes the file writer on exit)
    let _log_guard = logging::setup_logging(&bootstrap_config.session_id)?;

    tracing::info!("Starting higher/lower client");
    tracing::info!("API: {}", bootstrap_config.api_url);
    tracing::info!("Offline: {}", bootstrap_config.offline);

    // 3. Build Runtime (independent layer)
    let setup = RuntimeBuilder::new()
        .config(bootstrap_config)
        .build()
        .await?;
    tracing::info!("Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Compose and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
