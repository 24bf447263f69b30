//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - single-width characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires a patched font)

use archmap_app::config::IconMode;
use archmap_core::NodeIcon;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Pictogram for a diagram node
    pub fn node(&self, icon: NodeIcon) -> &'static str {
        match (self.mode, icon) {
            (IconMode::NerdFonts, NodeIcon::Brain) => "\u{f0eb}", // nf-fa-lightbulb_o
            (IconMode::NerdFonts, NodeIcon::Person) => "\u{f007}", // nf-fa-user
            (IconMode::NerdFonts, NodeIcon::People) => "\u{f0c0}", // nf-fa-users
            (IconMode::NerdFonts, NodeIcon::Male) => "\u{f183}",  // nf-fa-male
            (IconMode::NerdFonts, NodeIcon::Female) => "\u{f182}", // nf-fa-female
            (IconMode::NerdFonts, NodeIcon::Neutral) => "\u{f10c}", // nf-fa-circle_o
            (IconMode::NerdFonts, NodeIcon::Cloud) => "\u{f0c2}", // nf-fa-cloud
            (IconMode::NerdFonts, NodeIcon::Globe) => "\u{f0ac}", // nf-fa-globe
            (IconMode::NerdFonts, NodeIcon::Card) => "\u{f09d}",  // nf-fa-credit_card
            (IconMode::NerdFonts, NodeIcon::Apple) => "\u{f179}", // nf-fa-apple
            (IconMode::NerdFonts, NodeIcon::Robot) => "\u{f17b}", // nf-fa-android
            (IconMode::Unicode, NodeIcon::Brain) => "\u{25c6}",   // ◆
            (IconMode::Unicode, NodeIcon::Person) => "\u{25cb}",  // ○
            (IconMode::Unicode, NodeIcon::People) => "\u{25ce}",  // ◎
            (IconMode::Unicode, NodeIcon::Male) => "\u{2642}",    // ♂
            (IconMode::Unicode, NodeIcon::Female) => "\u{2640}",  // ♀
            (IconMode::Unicode, NodeIcon::Neutral) => "\u{25cc}", // ◌
            (IconMode::Unicode, NodeIcon::Cloud) => "\u{2601}",   // ☁
            (IconMode::Unicode, NodeIcon::Globe) => "\u{2295}",   // ⊕
            (IconMode::Unicode, NodeIcon::Card) => "\u{25ad}",    // ▭
            (IconMode::Unicode, NodeIcon::Apple) => "\u{25b2}",   // ▲
            (IconMode::Unicode, NodeIcon::Robot) => "\u{2699}",   // ⚙
        }
    }

    // --- Card titles ---

    pub fn clipboard(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0ea}", // nf-fa-clipboard
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn rocket(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f135}", // nf-fa-rocket
            IconMode::Unicode => "\u{00bb}",   // »
        }
    }

    pub fn briefcase(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0b1}", // nf-fa-briefcase
            IconMode::Unicode => "\u{25a0}",   // ■
        }
    }

    pub fn cogs(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f085}", // nf-fa-cogs
            IconMode::Unicode => "\u{2699}",   // ⚙
        }
    }

    pub fn sitemap(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e8}", // nf-fa-sitemap
            IconMode::Unicode => "\u{25a6}",   // ▦
        }
    }

    // --- Markers ---

    pub fn bullet(&self) -> &'static str {
        "\u{2022}" // •
    }
}

/// Section header marker while the section is expanded
pub const EXPANDED: &str = "\u{25be}"; // ▾

/// Section header marker while the section is collapsed
pub const COLLAPSED: &str = "\u{25b8}"; // ▸
