//! Gmail REST client for message search and metadata fetch.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use subhunt_core::{Header, MessageId, MessageMetadata};
use tracing::{debug, info};

use crate::{MailService, ServiceError};

pub const DEFAULT_BASE_URL: &str = "https://gmail.googleapis.com";

/// Headers requested with `format=metadata`; the classifier reads no others.
const METADATA_HEADERS: &[&str] = &["Subject", "From", "Date"];

/// Gmail API client bound to one access token.
pub struct GmailClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    messages: Vec<MessageRef>,
}

#[derive(Deserialize)]
struct MessageRef {
    id: String,
}

#[derive(Deserialize)]
struct WireMessage {
    id: String,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    payload: Option<WirePayload>,
}

#[derive(Deserialize)]
struct WirePayload {
    #[serde(default)]
    headers: Vec<WireHeader>,
}

#[derive(Deserialize)]
struct WireHeader {
    name: String,
    value: String,
}

impl From<WireMessage> for MessageMetadata {
    fn from(msg: WireMessage) -> Self {
        let headers = msg
            .payload
            .map(|p| {
                p.headers
                    .into_iter()
                    .map(|h| Header::new(h.name, h.value))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            id: MessageId(msg.id),
            headers,
            snippet: msg.snippet,
        }
    }
}

impl GmailClient {
    /// Create a client against the public Gmail API.
    ///
    /// `access_token` must already be valid; expiry surfaces as a
    /// `ServiceError::Server` with status 401.
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), access_token)
    }

    /// Create a client against another base URL (no trailing slash needed).
    pub fn with_base_url(base_url: String, access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/gmail/v1/users/me/messages", self.base_url)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ServiceError> {
        let resp = req.bearer_auth(&self.access_token).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl MailService for GmailClient {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<MessageId>, ServiceError> {
        let url = self.messages_url();
        info!(url = %url, max_results, "listing gmail messages");
        let max = max_results.to_string();
        let req = self
            .client
            .get(&url)
            .query(&[("q", query), ("maxResults", max.as_str())]);
        let list: ListResponse = self.send_json(req).await?;
        info!(count = list.messages.len(), "listed gmail messages");
        Ok(list.messages.into_iter().map(|m| MessageId(m.id)).collect())
    }

    async fn fetch(&self, id: &MessageId) -> Result<MessageMetadata, ServiceError> {
        let url = format!("{}/{}", self.messages_url(), id);
        debug!(id = %id, "fetching gmail message metadata");
        let mut params = vec![("format", "metadata")];
        params.extend(METADATA_HEADERS.iter().map(|h| ("metadataHeaders", *h)));
        let req = self.client.get(&url).query(&params);
        let msg: WireMessage = self.send_json(req).await?;
        Ok(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client = GmailClient::with_base_url("http://localhost:8080/".into(), "tok".into());
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(
            client.messages_url(),
            "http://localhost:8080/gmail/v1/users/me/messages"
        );
    }

    #[test]
    fn list_response_parses_ids() {
        let json = r#"{
            "messages": [
                {"id": "18f1a", "threadId": "18f1a"},
                {"id": "18f1b", "threadId": "18f19"}
            ],
            "nextPageToken": "0123",
            "resultSizeEstimate": 2
        }"#;
        let list: ListResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = list.messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["18f1a", "18f1b"]);
    }

    #[test]
    fn empty_list_response_has_no_messages_key() {
        let list: ListResponse = serde_json::from_str(r#"{"resultSizeEstimate": 0}"#).unwrap();
        assert!(list.messages.is_empty());
    }

    #[test]
    fn metadata_message_maps_headers_in_order() {
        let json = r#"{
            "id": "18f1a",
            "threadId": "18f1a",
            "labelIds": ["INBOX", "CATEGORY_UPDATES"],
            "snippet": "Your Netflix membership renews for $15.99 on 5/1",
            "payload": {
                "mimeType": "multipart/alternative",
                "headers": [
                    {"name": "From", "value": "\"Netflix\" <billing@netflix.com>"},
                    {"name": "Subject", "value": "Your subscription renewal"},
                    {"name": "Date", "value": "Thu, 24 Apr 2025 08:00:00 +0000"}
                ]
            }
        }"#;
        let wire: WireMessage = serde_json::from_str(json).unwrap();
        let msg = MessageMetadata::from(wire);
        assert_eq!(msg.id.as_str(), "18f1a");
        assert_eq!(msg.headers.len(), 3);
        assert_eq!(msg.header("Subject"), Some("Your subscription renewal"));
        assert_eq!(
            msg.snippet.as_deref(),
            Some("Your Netflix membership renews for $15.99 on 5/1")
        );
    }

    #[test]
    fn message_without_payload_or_snippet() {
        let wire: WireMessage = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        let msg = MessageMetadata::from(wire);
        assert!(msg.headers.is_empty());
        assert!(msg.snippet.is_none());
    }
}
