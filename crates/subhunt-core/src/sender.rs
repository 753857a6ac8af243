//! `From` header cleanup.

use std::sync::LazyLock;

use regex::Regex;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^>]+)>").expect("valid bracket pattern"));

/// Strip `<...>` segments and double quotes from a raw `From` header.
///
/// `"Billing Team" <billing@service.com>` becomes `Billing Team`. When
/// nothing but the bracketed address is present, the address itself is
/// kept rather than stripped to an empty string. Normalizing an
/// already-normalized sender is a no-op.
pub fn normalize_sender(raw: &str) -> String {
    let stripped = BRACKETED.replace_all(raw, "").replace('"', "");
    let trimmed = stripped.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    BRACKETED
        .captures(raw)
        .map(|caps| caps[1].replace('"', "").trim().to_string())
        .unwrap_or_default()
}
