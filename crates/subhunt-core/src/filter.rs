//! Keep/drop decision for classified messages.

/// Subject substrings that mark a renewal notice even without a price.
pub const RENEWAL_KEYWORDS: &[&str] = &["renew", "subscription", "bill"];

/// Keep a message if it carries a price or its subject reads like a renewal.
pub fn is_relevant(cost: f64, subject: &str) -> bool {
    if cost > 0.0 {
        return true;
    }
    let subject = subject.to_lowercase();
    RENEWAL_KEYWORDS.iter().any(|k| subject.contains(k))
}
