//! Color palette: a dark slate background with indigo accents.

use archmap_core::Rgb;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(15, 23, 42); // slate-900
pub const CARD_BG: Color = Color::Rgb(30, 41, 59); // slate-800
pub const CANVAS_BG: Color = Color::Rgb(22, 30, 50);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85); // slate-700
pub const BORDER_ACTIVE: Color = Color::Rgb(129, 140, 248); // indigo-400

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(129, 140, 248); // indigo-400
pub const ACCENT_DIM: Color = Color::Rgb(99, 102, 241); // indigo-500

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240); // slate-200
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // slate-400
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // slate-500
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black;

// --- Cards ---
pub const SETUP_ACCENT: Color = Color::Rgb(165, 180, 252); // indigo-300
pub const BUSINESS_ACCENT: Color = Color::Rgb(167, 243, 208); // emerald-200
pub const KEY_HINT: Color = Color::Rgb(250, 204, 21); // yellow-400

// --- Header tag pills ---
pub const TAG_COLORS: [Color; 4] = [
    Color::Rgb(110, 231, 183), // emerald-300
    Color::Rgb(196, 181, 253), // violet-300
    Color::Rgb(252, 211, 77),  // amber-300
    Color::Rgb(103, 232, 249), // cyan-300
];

/// Convert a content colour to a terminal colour
pub const fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}
