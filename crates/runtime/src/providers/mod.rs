//! Item source and image preloader implementations.
//!
//! - [`HttpItemSource`] talks to the live API
//! - [`CatalogItemSource`] serves the bundled catalog for offline play
//! - [`ScriptedItemSource`] replays queued responses for tests
//! - [`HttpImagePreloader`] warms image URLs in the background

pub mod catalog;
pub mod http;
pub mod preload;
pub mod scripted;
pub mod wire;

pub use catalog::CatalogItemSource;
pub use http::{DEFAULT_BASE_URL, HttpItemSource};
pub use preload::HttpImagePreloader;
pub use scripted::{Scripted, ScriptedItemSource};
