use std::num::NonZeroUsize;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use lru::LruCache;

use crate::domain::booking::BookingDraft;
use crate::ports::draft_store::DraftStore;

struct StoredDraft {
    draft: BookingDraft,
    expires_at: Instant,
}

/// Bounded in-memory session store. Every write restarts the idle TTL,
/// so a draft only expires after going untouched for the full window.
/// The least recently touched draft is evicted when the store is full.
pub struct MemoryDraftStore {
    inner: RwLock<LruCache<String, StoredDraft>>,
    ttl: Duration,
}

impl MemoryDraftStore {
    pub fn new(max_drafts: usize, ttl: Duration) -> Self {
        let cap = NonZeroUsize::new(max_drafts).unwrap_or_else(|| {
            tracing::warn!("Draft store max_drafts was 0, defaulting to 500");
            NonZeroUsize::new(500).unwrap()
        });
        Self {
            inner: RwLock::new(LruCache::new(cap)),
            ttl,
        }
    }
}

impl DraftStore for MemoryDraftStore {
    fn insert(&self, id: &str, draft: BookingDraft) {
        if let Ok(mut store) = self.inner.write() {
            let displaced = store.push(
                id.to_string(),
                StoredDraft {
                    draft,
                    expires_at: Instant::now() + self.ttl,
                },
            );
            if let Some((evicted_id, _)) = displaced {
                if evicted_id != id {
                    tracing::debug!("Draft '{evicted_id}' evicted to make room for '{id}'");
                }
            }
        } else {
            tracing::error!("Draft store lock poisoned on insert('{id}'), skipping write");
        }
    }

    fn get(&self, id: &str) -> Option<BookingDraft> {
        let mut store = self.inner.write().map_or_else(
            |_| {
                tracing::error!("Draft store lock poisoned on get('{id}'), returning miss");
                None
            },
            Some,
        )?;
        let entry = store.get(id)?;
        if Instant::now() > entry.expires_at {
            tracing::debug!("Draft '{id}' expired, dropping");
            store.pop(id);
            return None;
        }
        Some(entry.draft.clone())
    }

    fn remove(&self, id: &str) -> Option<BookingDraft> {
        let mut store = self.inner.write().map_or_else(
            |_| {
                tracing::error!("Draft store lock poisoned on remove('{id}'), returning miss");
                None
            },
            Some,
        )?;
        store.pop(id).map(|stored| stored.draft)
    }
}
