//! Per-message classification: metadata in, record (or nothing) out.

use tracing::debug;

use crate::categorize::categorize;
use crate::cost::parse_cost;
use crate::filter::is_relevant;
use crate::message::{MessageMetadata, extract_fields};
use crate::record::SubscriptionRecord;
use crate::sender::normalize_sender;

/// Build a record from message metadata without applying the relevance filter.
pub fn extract_record(msg: &MessageMetadata) -> SubscriptionRecord {
    let fields = extract_fields(msg);
    let cost = parse_cost(fields.snippet);
    let sender = normalize_sender(fields.sender);
    let category = categorize(fields.subject, &sender, fields.snippet);

    SubscriptionRecord {
        sender,
        subject: fields.subject.to_string(),
        cost,
        category,
        date: fields.date.to_string(),
    }
}

/// Classify one message, returning `None` when it is not worth keeping.
pub fn classify_message(msg: &MessageMetadata) -> Option<SubscriptionRecord> {
    let record = extract_record(msg);
    if is_relevant(record.cost, &record.subject) {
        Some(record)
    } else {
        debug!(id = %msg.id, subject = %record.subject, "dropping irrelevant message");
        None
    }
}
