//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Game progression, providers, best-score persistence)
//!   └─→ Frontend (UI layer - terminal today)
//! ```
//!
//! - **Client**: Composition root, lifecycle management
//! - **Runtime**: State machine worker and event emission
//! - **Frontend**: User interaction, event consumption, rendering (via RuntimeHandle only)

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives independently built layers
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. On frontend exit the runtime is shut down, flushing queued score saves
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend returns.
    ///
    /// The runtime is shut down even when the frontend fails; the frontend's
    /// error takes precedence.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(runtime.handle()).await;
        if let Err(e) = &frontend_result {
            tracing::error!("Frontend error: {:#}", e);
        }

        let shutdown_result = runtime.shutdown().await;
        if let Err(e) = &shutdown_result {
            tracing::error!("Runtime shutdown error: {}", e);
        }

        frontend_result?;
        shutdown_result?;
        Ok(())
    }
}
