//! Fixed diagram geometry: where each node sits, how big it is, and which lines connect them.
//!
//! Positions live in a virtual canvas: `x` is a percentage of its width and
//! `y` is measured in units of a canvas [`CANVAS_HEIGHT`] units tall. The
//! renderer scales both to terminal cells.

use crate::content::NodeId;
use crate::section::SectionId;

/// Height of the virtual canvas in layout units
pub const CANVAS_HEIGHT: u16 = 700;

/// Width of the virtual canvas in percent
pub const CANVAS_WIDTH: u16 = 100;

/// 24-bit colour, kept independent of any terminal library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }
}

/// Node box size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Large,
    Normal,
    Small,
}

impl SizeClass {
    /// Box size in terminal cells as `(width, height)`
    pub fn cells(&self) -> (u16, u16) {
        match self {
            SizeClass::Large => (22, 3),
            SizeClass::Normal => (18, 3),
            SizeClass::Small => (12, 3),
        }
    }
}

/// Pictogram shown next to a node label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIcon {
    Brain,
    Person,
    People,
    Male,
    Female,
    Neutral,
    Cloud,
    Globe,
    Card,
    Apple,
    Robot,
}

/// Static placement of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramNode {
    pub id: NodeId,
    /// Short label drawn inside the box
    pub label: &'static str,
    pub icon: NodeIcon,
    pub section: SectionId,
    pub x_percent: u16,
    pub y: u16,
    pub size: SizeClass,
    /// Gradient start and end colours
    pub fill: (Rgb, Rgb),
}

/// A line between two node centres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    pub color: Rgb,
    pub dashed: bool,
}

/// Placement of a section header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLabel {
    pub section: SectionId,
    pub x_percent: u16,
    pub y: u16,
    pub color: Rgb,
}

pub static NODES: [DiagramNode; NodeId::COUNT] = [
    DiagramNode {
        id: NodeId::AiAgent,
        label: "AI Agent Core",
        icon: NodeIcon::Brain,
        section: SectionId::Core,
        x_percent: 50,
        y: 100,
        size: SizeClass::Large,
        fill: (Rgb::hex(0x6366f1), Rgb::hex(0x8b5cf6)),
    },
    DiagramNode {
        id: NodeId::SingleCoach,
        label: "Single Coach",
        icon: NodeIcon::Person,
        section: SectionId::Coaching,
        x_percent: 30,
        y: 200,
        size: SizeClass::Normal,
        fill: (Rgb::hex(0x7c3aed), Rgb::hex(0xa855f7)),
    },
    DiagramNode {
        id: NodeId::DoubleCoach,
        label: "Double Coach",
        icon: NodeIcon::People,
        section: SectionId::Coaching,
        x_percent: 70,
        y: 200,
        size: SizeClass::Normal,
        fill: (Rgb::hex(0x9333ea), Rgb::hex(0xc026d3)),
    },
    DiagramNode {
        id: NodeId::Men,
        label: "Men",
        icon: NodeIcon::Male,
        section: SectionId::Users,
        x_percent: 20,
        y: 350,
        size: SizeClass::Small,
        fill: (Rgb::hex(0x2563eb), Rgb::hex(0x3b82f6)),
    },
    DiagramNode {
        id: NodeId::Women,
        label: "Women",
        icon: NodeIcon::Female,
        section: SectionId::Users,
        x_percent: 80,
        y: 350,
        size: SizeClass::Small,
        fill: (Rgb::hex(0xdb2777), Rgb::hex(0xec4899)),
    },
    DiagramNode {
        id: NodeId::Neutral,
        label: "Neutral",
        icon: NodeIcon::Neutral,
        section: SectionId::Users,
        x_percent: 50,
        y: 350,
        size: SizeClass::Small,
        fill: (Rgb::hex(0x6b7280), Rgb::hex(0x9ca3af)),
    },
    DiagramNode {
        id: NodeId::Gcp,
        label: "Google GCP",
        icon: NodeIcon::Cloud,
        section: SectionId::Cloud,
        x_percent: 25,
        y: 500,
        size: SizeClass::Normal,
        fill: (Rgb::hex(0x059669), Rgb::hex(0x10b981)),
    },
    DiagramNode {
        id: NodeId::Stripe,
        label: "Stripe",
        icon: NodeIcon::Card,
        section: SectionId::Payments,
        x_percent: 75,
        y: 500,
        size: SizeClass::Normal,
        fill: (Rgb::hex(0x7c3aed), Rgb::hex(0xa855f7)),
    },
    DiagramNode {
        id: NodeId::Translation,
        label: "Translation Studio",
        icon: NodeIcon::Globe,
        section: SectionId::Cloud,
        x_percent: 50,
        y: 500,
        size: SizeClass::Normal,
        fill: (Rgb::hex(0x0891b2), Rgb::hex(0x06b6d4)),
    },
    DiagramNode {
        id: NodeId::Ios,
        label: "iOS (Apple)",
        icon: NodeIcon::Apple,
        section: SectionId::Platforms,
        x_percent: 35,
        y: 620,
        size: SizeClass::Normal,
        fill: (Rgb::hex(0x374151), Rgb::hex(0x4b5563)),
    },
    DiagramNode {
        id: NodeId::Android,
        label: "Android",
        icon: NodeIcon::Robot,
        section: SectionId::Platforms,
        x_percent: 65,
        y: 620,
        size: SizeClass::Normal,
        fill: (Rgb::hex(0x15803d), Rgb::hex(0x22c55e)),
    },
];

pub static CONNECTIONS: [Connection; 11] = [
    // Core to coaching modes
    line(NodeId::AiAgent, NodeId::SingleCoach, 0x8b5cf6),
    line(NodeId::AiAgent, NodeId::DoubleCoach, 0x8b5cf6),
    // Core to user profiles
    line(NodeId::AiAgent, NodeId::Men, 0xf59e0b),
    line(NodeId::AiAgent, NodeId::Neutral, 0xf59e0b),
    line(NodeId::AiAgent, NodeId::Women, 0xf59e0b),
    // Core to cloud and payments
    line(NodeId::AiAgent, NodeId::Gcp, 0x10b981),
    line(NodeId::AiAgent, NodeId::Translation, 0x06b6d4),
    line(NodeId::AiAgent, NodeId::Stripe, 0xec4899),
    // Core to platforms
    line(NodeId::AiAgent, NodeId::Ios, 0x6366f1),
    line(NodeId::AiAgent, NodeId::Android, 0x22c55e),
    Connection {
        from: NodeId::Gcp,
        to: NodeId::Translation,
        color: Rgb::hex(0x10b981),
        dashed: true,
    },
];

pub static SECTION_LABELS: [SectionLabel; SectionId::COUNT] = [
    SectionLabel {
        section: SectionId::Core,
        x_percent: 50,
        y: 35,
        color: Rgb::hex(0xa5b4fc),
    },
    SectionLabel {
        section: SectionId::Coaching,
        x_percent: 50,
        y: 145,
        color: Rgb::hex(0x818cf8),
    },
    SectionLabel {
        section: SectionId::Users,
        x_percent: 50,
        y: 290,
        color: Rgb::hex(0xfbbf24),
    },
    SectionLabel {
        section: SectionId::Platforms,
        x_percent: 50,
        y: 565,
        color: Rgb::hex(0x22d3ee),
    },
    SectionLabel {
        section: SectionId::Cloud,
        x_percent: 37,
        y: 440,
        color: Rgb::hex(0x34d399),
    },
    SectionLabel {
        section: SectionId::Payments,
        x_percent: 75,
        y: 440,
        color: Rgb::hex(0xa78bfa),
    },
];

const fn line(from: NodeId, to: NodeId, color: u32) -> Connection {
    Connection {
        from,
        to,
        color: Rgb::hex(color),
        dashed: false,
    }
}

/// Placement of a node
pub fn node(id: NodeId) -> &'static DiagramNode {
    &NODES[id as usize]
}

/// Header placement of a section
pub fn section_label(section: SectionId) -> &'static SectionLabel {
    &SECTION_LABELS[section.index()]
}

/// Nodes belonging to a section, in table order
pub fn nodes_in(section: SectionId) -> impl Iterator<Item = &'static DiagramNode> {
    NODES.iter().filter(move |n| n.section == section)
}

/// Nodes in reading order: top to bottom, then left to right
pub fn reading_order() -> Vec<NodeId> {
    let mut nodes: Vec<&DiagramNode> = NODES.iter().collect();
    nodes.sort_by_key(|n| (n.y, n.x_percent));
    nodes.into_iter().map(|n| n.id).collect()
}
