// tests/support/mocks.rs
use async_trait::async_trait;
use slug_allocator::domain::errors::{DomainError, DomainResult};
use slug_allocator::domain::record::{CollectionId, RecordStore, Slug};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Read-only record store over in-memory collections. Seeding goes through
/// the test helpers, never through the `RecordStore` trait, so any write
/// observed via the trait would fail to compile in the first place.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: Mutex<HashMap<String, HashSet<String>>>,
    probes: AtomicUsize,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, collection: &str, slugs: &[&str]) {
        let mut records = self.records.lock().unwrap();
        let entry = records.entry(collection.to_string()).or_default();
        for slug in slugs {
            entry.insert((*slug).to_string());
        }
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self, collection: &str) -> HashSet<String> {
        self.records
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn exists(&self, collection: &CollectionId, slug: &Slug) -> DomainResult<bool> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().unwrap();
        Ok(records
            .get(collection.as_str())
            .is_some_and(|slugs| slugs.contains(slug.as_str())))
    }
}

/// Store whose every probe fails with a connectivity-shaped error.
#[derive(Default)]
pub struct FailingRecordStore {
    probes: AtomicUsize,
}

impl FailingRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn exists(&self, _collection: &CollectionId, _slug: &Slug) -> DomainResult<bool> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Persistence("connection refused".into()))
    }
}
