//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, platform directories, and runtime setup
//! that can be reused by the terminal frontend or any future client.
pub mod builder;
pub mod config;
pub mod dirs;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::BootstrapConfig;
