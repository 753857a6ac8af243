//! Core types and pure extraction logic: mailbox search results in, subscription records out.

pub mod categorize;
pub mod classify;
pub mod config;
pub mod cost;
pub mod filter;
pub mod message;
pub mod query;
pub mod record;
pub mod sender;

pub use categorize::categorize;
pub use classify::{classify_message, extract_record};
pub use config::{ScanConfig, clamp_days_back};
pub use cost::parse_cost;
pub use filter::is_relevant;
pub use message::{Header, MessageFields, MessageId, MessageMetadata, extract_fields};
pub use query::build_query;
pub use record::{Category, SubscriptionRecord};
pub use sender::normalize_sender;
