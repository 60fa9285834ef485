use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

#[derive(Debug)]
struct Entry<T> {
    value: T,
    touched_at: Instant,
}

impl<T> Entry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            touched_at: Instant::now(),
        }
    }
}

/// String-keyed map behind a shared async lock.
///
/// Cloning yields another handle onto the same map.
#[derive(Debug)]
pub(crate) struct KeyedStore<T> {
    entries: Arc<RwLock<HashMap<String, Entry<T>>>>,
}

impl<T> Clone for KeyedStore<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Default for KeyedStore<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Clone> KeyedStore<T> {
    pub(crate) async fn insert(&self, key: String, value: T) {
        self.entries.write().await.insert(key, Entry::new(value));
    }

    pub(crate) async fn get(&self, key: &str) -> Option<T> {
        self.entries
            .read()
            .await
            .get(key)
            .map(|entry| entry.value.clone())
    }

    pub(crate) async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    /// Mutate an entry in place under the write lock and return a snapshot.
    pub(crate) async fn update<F>(&self, key: &str, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(key)?;
        apply(&mut entry.value);
        entry.touched_at = Instant::now();
        Some(entry.value.clone())
    }

    pub(crate) async fn remove(&self, key: &str) -> Option<T> {
        self.entries
            .write()
            .await
            .remove(key)
            .map(|entry| entry.value)
    }

    /// Drop every entry untouched for at least `ttl`, returning how many went.
    pub(crate) async fn evict_older_than(&self, ttl: Duration) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.touched_at.elapsed() < ttl);
        before - entries.len()
    }

    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
