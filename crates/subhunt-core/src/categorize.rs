//! Keyword-based spending categories.
//!
//! Rules are evaluated in order and the first rule with any keyword
//! contained in the lowercased text wins, so a message mentioning both
//! "gym" and "netflix" is Streaming. Matching is plain substring
//! containment: "prime" also hits "Amazon Prime Video" and "primer".

use crate::record::Category;

/// Ordered keyword rules. [`Category::GeneralSubscription`] is the fallback
/// and has no rule.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Streaming,
        &["netflix", "hulu", "disney", "hbo", "prime", "youtube"],
    ),
    (
        Category::MusicAudio,
        &["spotify", "apple music", "pandora", "audible"],
    ),
    (
        Category::SoftwareSaas,
        &["adobe", "microsoft", "slack", "zoom", "canva", "chatgpt"],
    ),
    (
        Category::TechInfrastructure,
        &["aws", "azure", "digitalocean", "godaddy", "hostinger"],
    ),
    (
        Category::Health,
        &["gym", "fitness", "peloton", "myfitnesspal"],
    ),
    (
        Category::Food,
        &["food", "hello fresh", "uber eats", "doordash"],
    ),
];

/// Categorize a message from its subject, normalized sender and snippet.
pub fn categorize(subject: &str, sender: &str, snippet: &str) -> Category {
    let text = format!("{subject} {sender} {snippet}").to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::GeneralSubscription)
}
