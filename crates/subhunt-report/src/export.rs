//! CSV export of subscription records.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use csv::WriterBuilder;
use subhunt_core::SubscriptionRecord;
use tracing::info;

use crate::ExportError;

pub const CSV_HEADER: [&str; 5] = ["Sender", "Cost", "Subject", "Date", "Type"];

/// Write `records` as CSV: one header row, then one row per record with
/// the cost fixed to two decimals.
pub fn write_csv<W: Write>(records: &[SubscriptionRecord], writer: W) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for r in records {
        let cost = format!("{:.2}", r.cost);
        wtr.write_record([
            r.sender.as_str(),
            cost.as_str(),
            r.subject.as_str(),
            r.date.as_str(),
            r.category.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `records` to a CSV file at `path`, replacing any existing file.
pub fn export_csv(records: &[SubscriptionRecord], path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)?;
    info!(path = %path.display(), count = records.len(), "exported csv");
    Ok(())
}

/// `subscription_scan_YYYYMMDD.csv` for the given day.
pub fn default_file_name(date: NaiveDate) -> String {
    format!("subscription_scan_{}.csv", date.format("%Y%m%d"))
}
