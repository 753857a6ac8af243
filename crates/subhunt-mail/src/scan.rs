//! Scan orchestration: search once, then fetch and classify each message.
//!
//! A failed search aborts the run. A failed fetch skips that one message
//! and the batch carries on. At most `max_results` messages are processed
//! per run, with `pacing` slept after each successful fetch except the
//! last, and up to `concurrency` fetches in flight. Output keeps search order either way.

use futures::stream::{self, StreamExt};
use subhunt_core::{MessageId, ScanConfig, SubscriptionRecord, build_query, classify_message};
use tracing::{info, warn};

use crate::cache::{CacheKey, ScanCache};
use crate::{MailService, ServiceError};

enum Outcome {
    Kept(SubscriptionRecord),
    Dropped,
    Skipped,
}

/// Drives one mailbox through the classification pipeline.
pub struct Scanner<'a> {
    service: &'a dyn MailService,
    config: ScanConfig,
    cache: Option<&'a dyn ScanCache>,
}

impl<'a> Scanner<'a> {
    pub fn new(service: &'a dyn MailService, config: ScanConfig) -> Self {
        Self {
            service,
            config,
            cache: None,
        }
    }

    /// Reuse finished scans keyed by query and lookback window.
    pub fn with_cache(mut self, cache: &'a dyn ScanCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Search the mailbox and classify every hit.
    ///
    /// Returns the search error unchanged if the search fails.
    pub async fn scan(&self) -> Result<Vec<SubscriptionRecord>, ServiceError> {
        let query = build_query(self.config.days_back);
        let key = CacheKey {
            query: query.clone(),
            days_back: self.config.days_back,
        };

        if let Some(cache) = self.cache
            && let Some(records) = cache.get(&key)
        {
            info!(count = records.len(), "scan cache hit");
            return Ok(records);
        }

        info!(query = %query, max_results = self.config.max_results, "searching mailbox");
        let ids = self.service.search(&query, self.config.max_results).await?;
        info!(count = ids.len(), "search complete");

        let records = self.classify_batch(&ids).await;

        if let Some(cache) = self.cache {
            cache.put(key, records.clone());
        }
        Ok(records)
    }

    /// Fetch and classify `ids`, keeping relevant records in input order.
    ///
    /// Never fails: fetch errors are logged and the message is skipped.
    pub async fn classify_batch(&self, ids: &[MessageId]) -> Vec<SubscriptionRecord> {
        let cap = ids.len().min(self.config.cap());
        if cap < ids.len() {
            info!(cap, received = ids.len(), "truncating search results to cap");
        }

        let outcomes: Vec<Outcome> = stream::iter(ids[..cap].iter().enumerate())
            .map(|(i, id)| self.process(id, i + 1 < cap))
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        let (mut dropped, mut skipped) = (0usize, 0usize);
        let mut records = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                Outcome::Kept(r) => records.push(r),
                Outcome::Dropped => dropped += 1,
                Outcome::Skipped => skipped += 1,
            }
        }

        info!(kept = records.len(), dropped, skipped, "batch classified");
        records
    }

    /// Fetch and classify one message. A successful fetch is followed by
    /// the pacing delay unless `pace` is false (last message of the batch).
    async fn process(&self, id: &MessageId, pace: bool) -> Outcome {
        match self.service.fetch(id).await {
            Ok(msg) => {
                if pace && !self.config.pacing.is_zero() {
                    tokio::time::sleep(self.config.pacing).await;
                }
                match classify_message(&msg) {
                    Some(record) => Outcome::Kept(record),
                    None => Outcome::Dropped,
                }
            }
            Err(e) => {
                warn!(id = %id, error = %e, "skipping message: fetch failed");
                Outcome::Skipped
            }
        }
    }
}
