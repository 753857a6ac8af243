//! Classified subscription records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spending category assigned by keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Streaming,
    #[serde(rename = "Music/Audio")]
    MusicAudio,
    #[serde(rename = "Software/SaaS")]
    SoftwareSaas,
    #[serde(rename = "Tech Infrastructure")]
    TechInfrastructure,
    Health,
    Food,
    #[serde(rename = "General Subscription")]
    GeneralSubscription,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Streaming,
        Self::MusicAudio,
        Self::SoftwareSaas,
        Self::TechInfrastructure,
        Self::Health,
        Self::Food,
        Self::GeneralSubscription,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Streaming => "Streaming",
            Self::MusicAudio => "Music/Audio",
            Self::SoftwareSaas => "Software/SaaS",
            Self::TechInfrastructure => "Tech Infrastructure",
            Self::Health => "Health",
            Self::Food => "Food",
            Self::GeneralSubscription => "General Subscription",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recurring-charge notification, ready for aggregation and export.
///
/// Records carry no identity beyond their fields; two records from the
/// same sender are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    /// Normalized sender, free of angle brackets and quotes.
    pub sender: String,
    pub subject: String,
    /// Amount in the snippet's currency; `0.0` when none was found.
    pub cost: f64,
    pub category: Category,
    /// Raw `Date` header value, or empty.
    pub date: String,
}
