//! Static copy for the informational panels around the diagram.

use crate::diagram::Rgb;

pub const TITLE: &str = "AI Coaching Agent Architecture";
pub const SUBTITLE: &str = "Interactive Mind Map • Click nodes for details";

/// Tag pills under the title
pub const HEADER_TAGS: [&str; 4] = [
    "GCP Cloud",
    "Stripe Payments",
    "Multi-Platform",
    "Translation Ready",
];

pub const DETAILS_PLACEHOLDER_TITLE: &str = "Select a Node";
pub const DETAILS_PLACEHOLDER_TEXT: &str =
    "Click on any node in the mind map to see detailed information about that component.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SETUP_STEPS: [SetupStep; 5] = [
    SetupStep {
        step: 1,
        title: "GCP Free Tier",
        description: "Create Google Cloud account ($300 credit)",
    },
    SetupStep {
        step: 2,
        title: "Stripe Account",
        description: "Setup Stripe with test mode",
    },
    SetupStep {
        step: 3,
        title: "Firebase Project",
        description: "Initialize for auth & database",
    },
    SetupStep {
        step: 4,
        title: "Enable APIs",
        description: "Vertex AI, Translation, Cloud Run",
    },
    SetupStep {
        step: 5,
        title: "Deploy Agent",
        description: "Cloud Run container deployment",
    },
];

/// `(label, value)` lines of the business use case card
pub const BUSINESS_CASE: [(&str, &str); 4] = [
    ("Product", "AI Life/Career Coaching App"),
    ("Model", "Freemium + Subscription"),
    ("Target", "Global, Multi-language"),
    ("Revenue", "$9.99-$29.99/month tiers"),
];

/// `(category, technology)` cells of the tech stack grid
pub const TECH_STACK: [(&str, &str); 6] = [
    ("Backend", "GCP Cloud Run"),
    ("AI/ML", "Vertex AI"),
    ("Database", "Firestore"),
    ("Auth", "Firebase Auth"),
    ("Payments", "Stripe"),
    ("i18n", "Cloud Translate"),
];

/// One element of the architecture flow strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowItem {
    Stage { label: &'static str, color: Rgb },
    Separator(&'static str),
}

const fn stage(label: &'static str, color: u32) -> FlowItem {
    FlowItem::Stage {
        label,
        color: Rgb::hex(color),
    }
}

pub const ARCHITECTURE_FLOW: [FlowItem; 13] = [
    stage("Mobile App", 0x3b82f6),
    FlowItem::Separator("→"),
    stage("Firebase Auth", 0xf59e0b),
    FlowItem::Separator("→"),
    stage("Cloud Run API", 0x10b981),
    FlowItem::Separator("→"),
    stage("Vertex AI Agent", 0xa855f7),
    FlowItem::Separator("↔"),
    stage("Firestore DB", 0xf97316),
    FlowItem::Separator("|"),
    stage("Translation API", 0x06b6d4),
    FlowItem::Separator("|"),
    stage("Stripe Billing", 0x6366f1),
];
