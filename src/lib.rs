//! archmap - interactive terminal mind map of the AI Coaching Agent architecture
//!
//! Ties the workspace crates together: loads settings, applies command-line
//! overrides, and hands the resulting state to the TUI.

use std::path::Path;

use archmap_app::config::{load_settings, Settings};
use archmap_app::AppState;
use archmap_core::prelude::*;

/// Startup options given on the command line; each one replaces its config value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOverrides {
    pub select: Option<String>,
    pub collapse: Vec<String>,
    pub no_mouse: bool,
}

impl StartupOverrides {
    /// Apply on top of file settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(select) = &self.select {
            settings.startup.select = Some(select.clone());
        }
        if !self.collapse.is_empty() {
            settings.startup.collapsed = self.collapse.clone();
        }
        if self.no_mouse {
            settings.ui.mouse = false;
        }
    }
}

/// Build the initial application state for `project_path`
pub fn build_state(project_path: &Path, overrides: &StartupOverrides) -> AppState {
    let mut settings = load_settings(project_path);
    overrides.apply(&mut settings);
    debug!("Effective settings: {:?}", settings);
    AppState::with_settings(settings)
}

/// Run the interactive mind map
pub fn run(project_path: &Path, overrides: &StartupOverrides) -> Result<()> {
    archmap_core::logging::init()?;
    info!("Project path: {}", project_path.display());

    let state = build_state(project_path, overrides);
    let result = archmap_tui::run(state);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

/// Render one frame as plain text without touching the terminal
pub fn print_frame(
    project_path: &Path,
    overrides: &StartupOverrides,
    width: u16,
    height: u16,
) -> Result<String> {
    let state = build_state(project_path, overrides);
    archmap_tui::render_to_string(&state, width, height)
}
