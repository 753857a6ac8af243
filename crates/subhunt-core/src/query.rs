//! Mail search expression for recurring-charge notifications.

/// Subject terms that mark billing mail. Terms with spaces or hyphens are quoted.
pub const SUBJECT_TERMS: &[&str] = &[
    "receipt",
    "invoice",
    "subscription",
    "renewal",
    "trial ending",
    "auto-renew",
];

/// Sender-role terms typical of automated billing senders.
pub const SENDER_TERMS: &[&str] = &["billing", "noreply", "support"];

/// Build the search expression for a lookback window of `days_back` days.
///
/// Subject and sender terms are OR-ed together, then restricted to mail
/// newer than the window and outside the promotions category. The window
/// is used as given; see [`crate::clamp_days_back`].
pub fn build_query(days_back: u32) -> String {
    format!(
        "(subject:({}) OR from:({})) newer_than:{days_back}d -category:promotions",
        or_terms(SUBJECT_TERMS),
        or_terms(SENDER_TERMS),
    )
}

fn or_terms(terms: &[&str]) -> String {
    terms
        .iter()
        .map(|t| {
            if t.contains([' ', '-']) {
                format!("\"{t}\"")
            } else {
                (*t).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" OR ")
}
