//! Offline mailbox backed by a JSON array of message metadata.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use subhunt_core::{MessageId, MessageMetadata};
use tracing::{debug, info};

use crate::{MailService, ServiceError};

/// A mailbox loaded from exported message metadata.
///
/// Search ignores the query (the export is assumed to be pre-filtered) and
/// returns ids in file order, capped at `max_results`.
pub struct JsonMailbox {
    order: Vec<MessageId>,
    messages: HashMap<MessageId, MessageMetadata>,
}

impl JsonMailbox {
    pub fn new(messages: Vec<MessageMetadata>) -> Self {
        let order = messages.iter().map(|m| m.id.clone()).collect();
        let messages = messages.into_iter().map(|m| (m.id.clone(), m)).collect();
        Self { order, messages }
    }

    /// Parse a JSON array of message metadata.
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        let messages: Vec<MessageMetadata> = serde_json::from_str(json)?;
        Ok(Self::new(messages))
    }

    /// Load a JSON export from disk.
    pub async fn load(path: &Path) -> Result<Self, ServiceError> {
        let json = tokio::fs::read_to_string(path).await?;
        let mailbox = Self::from_json(&json)?;
        info!(path = %path.display(), count = mailbox.len(), "loaded fixture mailbox");
        Ok(mailbox)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[async_trait]
impl MailService for JsonMailbox {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<MessageId>, ServiceError> {
        debug!(query, "fixture mailbox ignores query");
        Ok(self
            .order
            .iter()
            .take(max_results as usize)
            .cloned()
            .collect())
    }

    async fn fetch(&self, id: &MessageId) -> Result<MessageMetadata, ServiceError> {
        self.messages
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::Unavailable(format!("message {id} not in mailbox")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"[
        {"id": "a", "headers": [{"name": "Subject", "value": "Receipt"}], "snippet": "$4.99"},
        {"id": "b", "headers": []},
        {"id": "c"}
    ]"#;

    #[tokio::test]
    async fn search_preserves_file_order_and_cap() {
        let mailbox = JsonMailbox::from_json(EXPORT).unwrap();
        assert_eq!(mailbox.len(), 3);
        let ids = mailbox.search("anything", 2).await.unwrap();
        assert_eq!(ids, vec![MessageId::from("a"), MessageId::from("b")]);
    }

    #[tokio::test]
    async fn fetch_known_and_unknown() {
        let mailbox = JsonMailbox::from_json(EXPORT).unwrap();
        let msg = mailbox.fetch(&"a".into()).await.unwrap();
        assert_eq!(msg.header("Subject"), Some("Receipt"));
        let err = mailbox.fetch(&"zzz".into()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(&path, EXPORT).unwrap();
        let mailbox = JsonMailbox::load(&path).await.unwrap();
        assert!(!mailbox.is_empty());
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let err = JsonMailbox::load(Path::new("/nonexistent/export.json"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ServiceError::Io(_)));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = JsonMailbox::from_json("{not json").err().unwrap();
        assert!(matches!(err, ServiceError::Json(_)));
    }
}
