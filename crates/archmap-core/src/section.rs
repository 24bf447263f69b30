//! Section identifiers: logical groupings of nodes that expand and collapse together.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A tracked section of the mind map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Core,
    Coaching,
    Users,
    Platforms,
    Cloud,
    Payments,
}

impl SectionId {
    pub const COUNT: usize = 6;

    /// All sections, in the order used for number-key shortcuts
    pub const ALL: [SectionId; Self::COUNT] = [
        SectionId::Core,
        SectionId::Coaching,
        SectionId::Users,
        SectionId::Platforms,
        SectionId::Cloud,
        SectionId::Payments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Core => "core",
            SectionId::Coaching => "coaching",
            SectionId::Users => "users",
            SectionId::Platforms => "platforms",
            SectionId::Cloud => "cloud",
            SectionId::Payments => "payments",
        }
    }

    /// Header text drawn above the section's nodes
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Core => "AI CORE",
            SectionId::Coaching => "COACHING MODES",
            SectionId::Users => "USER PROFILES",
            SectionId::Platforms => "MOBILE PLATFORMS",
            SectionId::Cloud => "CLOUD",
            SectionId::Payments => "PAYMENTS",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// Section bound to a 1-based number key
    pub fn from_shortcut(digit: char) -> Option<Self> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn shortcut(&self) -> char {
        let pos = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        char::from(b'1' + pos as u8)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| Error::unknown_section(s))
    }
}

/// Per-section boolean flags, one slot per [`SectionId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionFlags([bool; SectionId::COUNT]);

impl SectionFlags {
    pub fn all(value: bool) -> Self {
        Self([value; SectionId::COUNT])
    }

    pub fn get(&self, section: SectionId) -> bool {
        self.0[section.index()]
    }

    pub fn set(&mut self, section: SectionId, value: bool) {
        self.0[section.index()] = value;
    }

    /// Flip one flag, returning the new value
    pub fn flip(&mut self, section: SectionId) -> bool {
        let slot = &mut self.0[section.index()];
        *slot = !*slot;
        *slot
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, bool)> + '_ {
        SectionId::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

impl Default for SectionFlags {
    fn default() -> Self {
        Self::all(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_sections() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::parse(section.as_str()), Some(section));
        }
        assert_eq!(SectionId::parse("billing"), None);
        assert!("billing".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_shortcuts_map_one_to_six() {
        assert_eq!(SectionId::from_shortcut('1'), Some(SectionId::Core));
        assert_eq!(SectionId::from_shortcut('6'), Some(SectionId::Payments));
        assert_eq!(SectionId::from_shortcut('0'), None);
        assert_eq!(SectionId::from_shortcut('7'), None);
        assert_eq!(SectionId::from_shortcut('x'), None);
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_shortcut(section.shortcut()), Some(section));
        }
    }

    #[test]
    fn test_flags_default_to_true() {
        let flags = SectionFlags::default();
        assert!(flags.iter().all(|(_, v)| v));
    }

    #[test]
    fn test_flip_touches_one_slot() {
        let mut flags = SectionFlags::default();
        assert!(!flags.flip(SectionId::Users));
        for (section, value) in flags.iter() {
            assert_eq!(value, section != SectionId::Users);
        }
        assert!(flags.flip(SectionId::Users));
        assert_eq!(flags, SectionFlags::default());
    }
}
