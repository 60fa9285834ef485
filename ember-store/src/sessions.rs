use std::time::Duration;

use crate::keyed::KeyedStore;
use crate::models::Person;

/// Paging state for one rendered result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Fetched records in display order.
    pub items: Vec<Person>,
    /// Zero-based page cursor.
    pub current_page: usize,
    /// Records shown per page, never zero.
    pub page_size: usize,
}

impl Session {
    /// Start a session on its first page.
    pub fn new(items: Vec<Person>, page_size: usize) -> Self {
        Self {
            items,
            current_page: 0,
            page_size: page_size.max(1),
        }
    }
}

/// Owner of every pagination session, keyed by the originating interaction id.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    inner: KeyedStore<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh session for `key`, replacing any previous one, and return it.
    pub async fn create(
        &self,
        key: impl Into<String>,
        items: Vec<Person>,
        page_size: usize,
    ) -> Session {
        let session = Session::new(items, page_size);
        self.inner.insert(key.into(), session.clone()).await;
        session
    }

    /// Snapshot of the session for `key`.
    ///
    /// Expired and never-created keys both come back as `None`.
    pub async fn get(&self, key: &str) -> Option<Session> {
        self.inner.get(key).await
    }

    /// Apply `apply` to the session under the store lock and return the result.
    ///
    /// Concurrent updates to the same key are serialized.
    pub async fn update<F>(&self, key: &str, apply: F) -> Option<Session>
    where
        F: FnOnce(&mut Session),
    {
        self.inner.update(key, apply).await
    }

    pub async fn delete(&self, key: &str) {
        self.inner.remove(key).await;
    }

    /// Remove sessions untouched for at least `ttl`.
    pub async fn evict_older_than(&self, ttl: Duration) -> usize {
        self.inner.evict_older_than(ttl).await
    }

    pub async fn len(&self) -> usize {
        self.inner.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
