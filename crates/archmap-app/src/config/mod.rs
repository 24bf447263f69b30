//! Configuration file parsing for archmap
//!
//! Supports `.archmap/config.toml` in the directory passed on the command line.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, resolve_startup, StartupView};
pub use types::*;
