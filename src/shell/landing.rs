//! Landing screen content

pub const TITLE: &str = "AI Health Bridge";

pub const TAGLINE: &str = "Bridging healthcare gaps in rural communities through AI-powered solutions, telehealth, and smart logistics.";

pub const MISSION: &str = "Our mission is to eliminate preventable deaths and improve health outcomes in rural communities by leveraging technology and human compassion.";

/// (figure, label)
pub const STATS: &[(&str, &str)] = &[
    ("1000+", "Villages Served"),
    ("24/7", "AI Support"),
    ("50k+", "Lives Impacted"),
];

/// A feature card on the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub command: &'static str,
}

pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        title: "AI Chatbot",
        description: "24/7 symptom diagnosis and health guidance via SMS, making healthcare accessible to all.",
        command: "/chat",
    },
    FeatureCard {
        title: "Teleconsultation",
        description: "Connect with doctors remotely through low-bandwidth solutions with offline sync capabilities.",
        command: "/consult",
    },
    FeatureCard {
        title: "Medicine Tracker",
        description: "Real-time tracking of medicine availability through NGO and government partnerships.",
        command: "/medicine",
    },
    FeatureCard {
        title: "Emergency Transport",
        description: "AI-powered ride-sharing system for quick and reliable emergency transportation.",
        command: "/transport",
    },
];
