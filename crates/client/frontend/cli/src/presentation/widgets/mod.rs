//! Widgets composing the terminal UI, one module per panel.
pub mod card;
pub mod footer;
pub mod game_over;
pub mod header;
pub mod home;
pub mod messages;
pub mod status;
