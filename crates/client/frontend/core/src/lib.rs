//! Cross-frontend primitives for presenting the game.
//!
//! Houses screen routing, number formatting, the message log, and view-model
//! types that the terminal client and any future graphical client can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod screen;
pub mod services;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use format::{NOT_AVAILABLE, format_metric};
pub use frontend::Frontend;
pub use screen::{Router, Screen};
pub use services::{UpdateScope, ViewModelUpdater};
pub use view_model::{CardView, MetricView, PresentationMapper, ViewModel};
