//! Static content table: node identifiers and their display records.
//!
//! The table is a compile-time constant indexed by [`NodeId`], so a lookup is
//! an array access and an unknown identifier cannot be represented.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of a node in the mind map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    AiAgent,
    SingleCoach,
    DoubleCoach,
    Men,
    Women,
    Neutral,
    Gcp,
    Stripe,
    Translation,
    Ios,
    Android,
}

impl NodeId {
    /// Number of nodes in the table
    pub const COUNT: usize = 11;

    /// All node identifiers, in table order
    pub const ALL: [NodeId; Self::COUNT] = [
        NodeId::AiAgent,
        NodeId::SingleCoach,
        NodeId::DoubleCoach,
        NodeId::Men,
        NodeId::Women,
        NodeId::Neutral,
        NodeId::Gcp,
        NodeId::Stripe,
        NodeId::Translation,
        NodeId::Ios,
        NodeId::Android,
    ];

    /// String key used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeId::AiAgent => "ai-agent",
            NodeId::SingleCoach => "single-coach",
            NodeId::DoubleCoach => "double-coach",
            NodeId::Men => "men",
            NodeId::Women => "women",
            NodeId::Neutral => "neutral",
            NodeId::Gcp => "gcp",
            NodeId::Stripe => "stripe",
            NodeId::Translation => "translation",
            NodeId::Ios => "ios",
            NodeId::Android => "android",
        }
    }

    /// Resolve a string key, returning `None` for anything not in the table
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| Error::unknown_node(s))
    }
}

/// Display record for a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub title: &'static str,
    pub description: &'static str,
    /// Feature bullets, in display order
    pub features: &'static [&'static str],
}

/// Immutable mapping from [`NodeId`] to [`NodeRecord`]
#[derive(Debug)]
pub struct ContentTable {
    records: [NodeRecord; NodeId::COUNT],
}

impl ContentTable {
    /// The built-in architecture content
    pub fn builtin() -> &'static ContentTable {
        &CONTENT
    }

    pub fn get(&self, id: NodeId) -> &NodeRecord {
        &self.records[id.index()]
    }

    /// Look up a record by its string key
    pub fn lookup(&self, key: &str) -> Option<&NodeRecord> {
        NodeId::parse(key).map(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

static CONTENT: ContentTable = ContentTable {
    records: [
        NodeRecord {
            id: NodeId::AiAgent,
            title: "AI Coaching Agent",
            description: "Core conversational AI that provides personalized coaching experiences",
            features: &[
                "Natural Language Processing",
                "Context Awareness",
                "Personality Adaptation",
                "Goal Tracking",
            ],
        },
        NodeRecord {
            id: NodeId::SingleCoach,
            title: "Single Coach Mode",
            description: "One AI coach per user session for focused, consistent guidance",
            features: &[
                "Dedicated personality",
                "Session continuity",
                "Deep personalization",
                "Progress tracking",
            ],
        },
        NodeRecord {
            id: NodeId::DoubleCoach,
            title: "Double Coach Mode",
            description: "Two AI coaches collaborate for diverse perspectives",
            features: &[
                "Complementary styles",
                "Debate/discussion mode",
                "Broader insights",
                "Role specialization",
            ],
        },
        NodeRecord {
            id: NodeId::Men,
            title: "Male Users Profile",
            description: "Tailored coaching approach for male users",
            features: &[
                "Communication style adaptation",
                "Goal-oriented metrics",
                "Achievement tracking",
            ],
        },
        NodeRecord {
            id: NodeId::Women,
            title: "Female Users Profile",
            description: "Tailored coaching approach for female users",
            features: &[
                "Empathetic communication",
                "Holistic wellness",
                "Support networks",
            ],
        },
        NodeRecord {
            id: NodeId::Neutral,
            title: "Neutral Profile",
            description: "Gender-neutral coaching approach",
            features: &[
                "Inclusive language",
                "Universal frameworks",
                "Adaptive responses",
            ],
        },
        NodeRecord {
            id: NodeId::Gcp,
            title: "Google Cloud Platform",
            description: "Primary cloud infrastructure provider",
            features: &[
                "Cloud Run",
                "Vertex AI",
                "Cloud Functions",
                "Firestore",
                "Cloud Translation API",
            ],
        },
        NodeRecord {
            id: NodeId::Stripe,
            title: "Stripe Payments",
            description: "Payment processing and subscription management",
            features: &[
                "Subscription billing",
                "Payment intents",
                "Webhooks",
                "Customer portal",
            ],
        },
        NodeRecord {
            id: NodeId::Translation,
            title: "Translation Studio",
            description: "Multi-language support in cloud environment",
            features: &[
                "Google Cloud Translation",
                "Real-time translation",
                "Language detection",
                "100+ languages",
            ],
        },
        NodeRecord {
            id: NodeId::Ios,
            title: "iOS App (Apple)",
            description: "Native iOS application",
            features: &[
                "Swift/SwiftUI",
                "App Store distribution",
                "Push notifications",
                "HealthKit integration",
            ],
        },
        NodeRecord {
            id: NodeId::Android,
            title: "Android App",
            description: "Native Android application",
            features: &[
                "Kotlin",
                "Play Store distribution",
                "Firebase messaging",
                "Google Fit integration",
            ],
        },
    ],
};
