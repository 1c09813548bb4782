// src/domain/services.rs
use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{CollectionId, RecordStore, Slug};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
pub const DEFAULT_MAX_BASE_LEN: usize = 100;

/// Domain service responsible for producing slugs that are unique within a
/// collection at the moment of allocation.
///
/// `allocate` is read-only: it probes the store and leaves persisting the
/// returned slug to the caller, so two concurrent allocations of the same
/// text can still collide at insert time. Callers whose store enforces a
/// unique constraint on the slug column should prefer
/// [`allocate_on_conflict`](Self::allocate_on_conflict), which lets the
/// constraint arbitrate and retries with the next suffix.
pub struct SlugAllocator {
    store: Arc<dyn RecordStore>,
    generator: Arc<dyn SlugGenerator>,
    max_attempts: u32,
    max_base_len: usize,
}

impl SlugAllocator {
    pub fn new(store: Arc<dyn RecordStore>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            store,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_base_len: DEFAULT_MAX_BASE_LEN,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub fn with_max_base_len(mut self, max_base_len: usize) -> Self {
        self.max_base_len = max_base_len.clamp(1, DEFAULT_MAX_BASE_LEN);
        self
    }

    /// Derive a slug from `text` and probe `collection` until a free
    /// candidate is found, trying `base`, `base-1`, `base-2`, …
    ///
    /// Store failures propagate immediately; only a positive "slug taken"
    /// result advances the loop. After `max_attempts` taken candidates the
    /// allocation fails with [`DomainError::SlugSpaceExhausted`].
    pub async fn allocate(&self, collection: &CollectionId, text: &str) -> DomainResult<Slug> {
        let base = self.base_slug(collection, text);
        debug!(collection = %collection, base = %base, "allocating slug");

        for attempt in 0..self.max_attempts {
            let slug = Slug::new(candidate(&base, attempt))?;
            if self.store.exists(collection, &slug).await? {
                debug!(collection = %collection, candidate = %slug, "slug taken, trying next suffix");
                continue;
            }
            return Ok(slug);
        }

        warn!(collection = %collection, base = %base, attempts = self.max_attempts, "slug space exhausted");
        Err(DomainError::SlugSpaceExhausted {
            base,
            attempts: self.max_attempts,
        })
    }

    /// Insert-or-retry allocation: `insert` attempts to persist a record
    /// carrying the candidate slug and must surface the store's
    /// unique-constraint violation as [`DomainError::Conflict`]. On conflict
    /// the next suffixed candidate is tried; any other error propagates
    /// unchanged. Unlike [`allocate`](Self::allocate) this closes the
    /// check-then-act race, because uniqueness is decided by the insert
    /// itself.
    pub async fn allocate_on_conflict<T, F, Fut>(
        &self,
        collection: &CollectionId,
        text: &str,
        mut insert: F,
    ) -> DomainResult<T>
    where
        F: FnMut(Slug) -> Fut,
        Fut: Future<Output = DomainResult<T>>,
    {
        let base = self.base_slug(collection, text);
        debug!(collection = %collection, base = %base, "allocating slug via insert conflict");

        for attempt in 0..self.max_attempts {
            let slug = Slug::new(candidate(&base, attempt))?;
            match insert(slug).await {
                Err(DomainError::Conflict(reason)) => {
                    debug!(collection = %collection, attempt, reason = %reason, "insert conflicted, trying next suffix");
                }
                other => return other,
            }
        }

        warn!(collection = %collection, base = %base, attempts = self.max_attempts, "slug space exhausted");
        Err(DomainError::SlugSpaceExhausted {
            base,
            attempts: self.max_attempts,
        })
    }

    fn base_slug(&self, collection: &CollectionId, text: &str) -> String {
        let mut base = self.generator.slugify(text);

        if base.len() > self.max_base_len {
            let cut = (0..=self.max_base_len)
                .rev()
                .find(|i| base.is_char_boundary(*i))
                .unwrap_or(0);
            base.truncate(cut);
            base = base.trim_end_matches('-').to_string();
        }

        if base.is_empty() {
            // Collection names may carry underscores, which are not slug-safe.
            format!(
                "{}-{}",
                collection.as_str().replace('_', "-"),
                Utc::now().timestamp()
            )
        } else {
            base
        }
    }
}

fn candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}
