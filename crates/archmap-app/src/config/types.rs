//! Configuration types for archmap
//!
//! Defines:
//! - `Settings` - Application settings (`.archmap/config.toml`)
//! - `UiSettings`, `StartupSettings` - Sub-tables
//! - `IconMode` - Glyph set selection

use serde::{Deserialize, Serialize};

/// Application settings (.archmap/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub startup: StartupSettings,
}

/// Icon rendering mode
///
/// Nerd Font glyphs render richer icons but need a patched font; the
/// Unicode set works in every terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Capture mouse events so nodes can be clicked
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Show the setup / business / tech stack cards beside the details panel
    #[serde(default = "default_true")]
    pub show_side_panels: bool,

    /// Show the architecture flow strip under the diagram
    #[serde(default = "default_true")]
    pub show_flow: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            mouse: true,
            show_side_panels: true,
            show_flow: true,
        }
    }
}

/// Initial view state
///
/// Identifiers are kept as strings so a typo in one entry does not make the
/// whole file unreadable; they are resolved (and reported) at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StartupSettings {
    /// Node to select on launch
    ///
    /// Applied after `collapsed`, and selected even when its section starts
    /// collapsed: the details panel shows it while the box stays hidden and
    /// keyboard focus starts empty. At runtime a hidden node cannot be
    /// selected until its section is expanded again.
    #[serde(default)]
    pub select: Option<String>,

    /// Sections that start collapsed
    #[serde(default)]
    pub collapsed: Vec<String>,
}

fn default_true() -> bool {
    true
}
