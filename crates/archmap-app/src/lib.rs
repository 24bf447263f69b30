//! archmap-app - View state and update loop for archmap
//!
//! This crate implements the TEA (The Elm Architecture) pattern: an
//! [`AppState`] model, [`Message`]s, and a pure [`handler::update`] function.
//! It also loads `.archmap/config.toml`. Nothing here depends on a terminal
//! library, so the whole interaction model is testable headless.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod view_state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState};
pub use view_state::{DetailsView, ViewState};
