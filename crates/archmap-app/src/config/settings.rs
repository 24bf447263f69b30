//! Settings parser for .archmap/config.toml

use super::types::Settings;
use archmap_core::prelude::*;
use archmap_core::{NodeId, SectionId};
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const ARCHMAP_DIR: &str = ".archmap";

const DEFAULT_CONFIG: &str = r#"# archmap configuration

[ui]
icons = "unicode"         # or "nerd_fonts"
mouse = true              # click nodes and section headers
show_side_panels = true
show_flow = true

[startup]
# select = "ai-agent"     # node selected on launch
# collapsed = ["users"]   # sections that start collapsed
"#;

/// Load settings from `.archmap/config.toml` under `project_path`
///
/// A missing file yields defaults. An unreadable or malformed file is
/// logged and also yields defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(ARCHMAP_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config unless one already exists
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let archmap_dir = project_path.join(ARCHMAP_DIR);

    if !archmap_dir.exists() {
        std::fs::create_dir_all(&archmap_dir)
            .map_err(|e| Error::config(format!("Failed to create .archmap dir: {}", e)))?;
    }

    let config_path = archmap_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

/// Startup selection and collapsed sections with unknown names dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupView {
    pub select: Option<NodeId>,
    pub collapsed: Vec<SectionId>,
}

/// Resolve the `[startup]` table against the known identifiers
///
/// Unknown names are ignored with a warning rather than treated as fatal.
pub fn resolve_startup(settings: &Settings) -> StartupView {
    let select = settings
        .startup
        .select
        .as_deref()
        .and_then(|key| match key.parse::<NodeId>() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Ignoring startup.select: {}", e);
                None
            }
        });

    let mut collapsed = Vec::new();
    for name in &settings.startup.collapsed {
        match name.parse::<SectionId>() {
            Ok(section) if !collapsed.contains(&section) => collapsed.push(section),
            Ok(_) => {}
            Err(e) => warn!("Ignoring startup.collapsed entry: {}", e),
        }
    }

    StartupView { select, collapsed }
}
