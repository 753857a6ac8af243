//! Plain-text rendering of a scan: summary block, category breakdown,
//! most expensive records, then the full record table.

use subhunt_core::SubscriptionRecord;
use subhunt_report::Summary;

const SENDER_WIDTH: usize = 28;
const SUBJECT_WIDTH: usize = 40;
const DATE_WIDTH: usize = 31;

// ── Public API ──

/// Print the full report for a finished scan.
pub fn print_report(summary: &Summary, records: &[SubscriptionRecord]) {
    if summary.is_empty() {
        println!("No subscriptions found. Your inbox is clean.");
        return;
    }

    println!("=== Found {} potential subscriptions ===", summary.record_count);
    println!();

    print_summary(summary);
    print_categories(summary);
    print_most_expensive(summary);
    print_records(records);
}

// ── Section rendering ──

fn print_summary(summary: &Summary) {
    println!("Summary");
    println!("  {:<26} {:.2}", "total_cost", summary.total_cost);
    println!("  {:<26} {:.2}", "average_cost", summary.average_cost);
    println!("  {:<26} {}", "records", summary.record_count);
    println!("  {:<26} {}", "unique_senders", summary.unique_senders);
    println!();
}

fn print_categories(summary: &Summary) {
    println!("Cost by Category");
    for c in &summary.by_category {
        println!(
            "  {:<26} {:>10.2}  ({} {})",
            c.category.as_str(),
            c.total_cost,
            c.count,
            if c.count == 1 { "record" } else { "records" }
        );
    }
    println!();
}

fn print_most_expensive(summary: &Summary) {
    let priced: Vec<&SubscriptionRecord> = summary
        .most_expensive
        .iter()
        .filter(|r| r.cost > 0.0)
        .collect();
    if priced.is_empty() {
        return;
    }

    println!("Most Expensive");
    for r in priced {
        println!("  {:<26} {:>10.2}", truncate(&r.sender, 26), r.cost);
    }
    println!();
}

fn print_records(records: &[SubscriptionRecord]) {
    println!("Records");
    println!(
        "  {:<sw$} {:>10}  {:<subw$} {:<dw$} Type",
        "Sender",
        "Cost",
        "Subject",
        "Date",
        sw = SENDER_WIDTH,
        subw = SUBJECT_WIDTH,
        dw = DATE_WIDTH,
    );
    for r in records {
        println!(
            "  {:<sw$} {:>10.2}  {:<subw$} {:<dw$} {}",
            truncate(&r.sender, SENDER_WIDTH),
            r.cost,
            truncate(&r.subject, SUBJECT_WIDTH),
            truncate(&r.date, DATE_WIDTH),
            r.category,
            sw = SENDER_WIDTH,
            subw = SUBJECT_WIDTH,
            dw = DATE_WIDTH,
        );
    }
}

/// Cut `s` to at most `max` characters, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
