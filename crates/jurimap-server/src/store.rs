//! In-memory, per-session result storage.
//!
//! Each stored [`SearchResult`] is self-contained and keyed by its own id;
//! sessions never observe each other's results. The map is FIFO-bounded so
//! abandoned sessions cannot grow memory without limit.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use jurimap_search::SearchResult;

#[derive(Clone)]
pub struct SearchStore {
    inner: Arc<Mutex<StoreInner>>,
    capacity: usize,
}

struct StoreInner {
    results: HashMap<Uuid, SearchResult>,
    order: VecDeque<Uuid>,
}

impl SearchStore {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                results: HashMap::new(),
                order: VecDeque::new(),
            })),
            capacity: capacity.max(1),
        }
    }

    /// Stores a result under its own id, evicting the oldest entry once the
    /// capacity is exceeded.
    pub async fn insert(&self, result: SearchResult) {
        let mut inner = self.inner.lock().await;
        let id = result.id;
        if inner.results.insert(id, result).is_none() {
            inner.order.push_back(id);
        }
        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.results.remove(&evicted);
                tracing::debug!(id = %evicted, "evicted oldest stored search result");
            }
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<SearchResult> {
        self.inner.lock().await.results.get(&id).cloned()
    }

    /// Removes a stored result; returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut inner = self.inner.lock().await;
        let existed = inner.results.remove(&id).is_some();
        if existed {
            inner.order.retain(|stored| *stored != id);
        }
        existed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jurimap_core::{Coordinate, SearchOrigin};

    fn result() -> SearchResult {
        SearchResult {
            id: Uuid::new_v4(),
            origin: SearchOrigin {
                coordinate: Coordinate::new(20.2961, 85.8245).unwrap(),
                query: "Bhubaneswar".to_owned(),
                display_name: "Bhubaneswar, Odisha, India".to_owned(),
            },
            radius_km: 5.0,
            categories: vec![],
            total_found: 0,
            searched_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = SearchStore::new(4);
        let r = result();
        let id = r.id;
        store.insert(r.clone()).await;
        assert_eq!(store.get(id).await, Some(r));
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let store = SearchStore::new(4);
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn remove_clears_the_entry() {
        let store = SearchStore::new(4);
        let r = result();
        let id = r.id;
        store.insert(r).await;
        assert!(store.remove(id).await);
        assert!(!store.remove(id).await);
        assert!(store.get(id).await.is_none());
    }

    #[tokio::test]
    async fn capacity_evicts_oldest_first() {
        let store = SearchStore::new(2);
        let first = result();
        let second = result();
        let third = result();
        let (a, b, c) = (first.id, second.id, third.id);

        store.insert(first).await;
        store.insert(second).await;
        store.insert(third).await;

        assert!(store.get(a).await.is_none(), "oldest entry must be evicted");
        assert!(store.get(b).await.is_some());
        assert!(store.get(c).await.is_some());
    }
}
