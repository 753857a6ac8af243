//! Optional memoization of classified scans.
//!
//! The scanner only consults a cache it was explicitly given.

use std::collections::HashMap;
use std::sync::Mutex;

use subhunt_core::SubscriptionRecord;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub days_back: u32,
}

/// Storage for finished record lists.
pub trait ScanCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Vec<SubscriptionRecord>>;
    fn put(&self, key: CacheKey, records: Vec<SubscriptionRecord>);
}

/// Process-local cache; lives as long as its owner.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<CacheKey, Vec<SubscriptionRecord>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl ScanCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<Vec<SubscriptionRecord>> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn put(&self, key: CacheKey, records: Vec<SubscriptionRecord>) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, records);
    }
}
