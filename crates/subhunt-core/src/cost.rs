//! Monetary amount extraction from snippet text.
//!
//! Recognises amounts written with exactly two fractional digits and a
//! currency symbol (`$`, `£`, `€`) on either side:
//!
//! - symbol first: `$15.99`, `£1,234.56`, `€1.234.56`
//! - symbol last: `15.99$`, `1234.56 €`
//!
//! Thousands separators (`,` or `.`) between three-digit groups are
//! allowed and stripped: `$1,234,567.89` is `1234567.89`.
//! Whole amounts (`$12`) and three-decimal amounts (`$12.345`) are not
//! recognised and yield `0.0`, which keeps order numbers and dates in the
//! snippet from being read as prices.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Integer part: grouped (`1,234,567`, `1.234`) or plain digits.
const INTEGER: &str = r"(\d{1,3}(?:[,.]\d{3})+|\d+)";

static SYMBOL_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[$£€]{INTEGER}\.(\d{{2}})(?:\D|$)"))
        .expect("valid symbol-first pattern")
});

// The leading boundary keeps a match from starting inside a digit group.
static SYMBOL_LAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:^|[^\d,.]){INTEGER}\.(\d{{2}})\s*[$£€]"))
        .expect("valid symbol-last pattern")
});

/// Find the first monetary amount in `snippet`, or `0.0` if there is none.
///
/// The symbol-first form is tried over the whole text before the
/// symbol-last form.
pub fn parse_cost(snippet: &str) -> f64 {
    SYMBOL_FIRST
        .captures(snippet)
        .or_else(|| SYMBOL_LAST.captures(snippet))
        .and_then(|caps| amount(&caps))
        .unwrap_or(0.0)
}

/// Join integer groups (dropping separators) and the cents.
fn amount(caps: &Captures<'_>) -> Option<f64> {
    let integer: String = caps[1].chars().filter(char::is_ascii_digit).collect();
    let digits = format!("{integer}.{}", &caps[2]);
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}
