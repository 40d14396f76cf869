//! Runtime orchestration for the higher/lower game.
//!
//! This crate is the imperative shell around [`game_core::GameMachine`]. It
//! wires item providers, the best-score store, and worker tasks into a
//! cohesive runtime API. Consumers embed [`Runtime`] to drive games, subscribe
//! to events, and query state through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`animation`] runs the number reveal animator on the tokio clock
//! - [`providers`] and [`repository`] provide data adapters reused by other crates
//! - `workers` keeps background tasks internal to the crate
pub mod animation;
pub mod api;
pub mod events;
pub mod providers;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{
    ImagePreloader, ItemSource, NoopPreloader, ProviderError, ProviderResult, Result,
    RuntimeError, RuntimeHandle,
};
pub use events::{Event, EventBus, RevealEvent, SessionEvent, StateEvent, Topic};
pub use providers::{
    CatalogItemSource, DEFAULT_BASE_URL, HttpImagePreloader, HttpItemSource, Scripted,
    ScriptedItemSource,
};
pub use repository::{FileScoreStore, InMemoryScoreStore, RepositoryError, ScoreStore};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
