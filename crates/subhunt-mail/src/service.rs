//! The capability the scanner needs from a mailbox.

use async_trait::async_trait;
use subhunt_core::{MessageId, MessageMetadata};

use crate::ServiceError;

/// Search and fetch against an already-authenticated mailbox.
///
/// Implementations receive resolved credentials up front; nothing here
/// acquires or refreshes them.
#[async_trait]
pub trait MailService: Send + Sync {
    /// Identifiers of messages matching `query`, at most `max_results` of them.
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<MessageId>, ServiceError>;

    /// Header and snippet metadata for one message.
    async fn fetch(&self, id: &MessageId) -> Result<MessageMetadata, ServiceError>;
}
