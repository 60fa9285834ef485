use std::time::Duration;

use crate::keyed::KeyedStore;

/// A pending two-party game invitation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    pub challenger_id: u64,
    /// Object picked by the challenger, as submitted.
    pub choice: String,
}

/// Owner of every open challenge, keyed by the `/challenge` interaction id.
#[derive(Clone, Debug, Default)]
pub struct ChallengeStore {
    inner: KeyedStore<Challenge>,
}

impl ChallengeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, key: impl Into<String>, challenge: Challenge) {
        self.inner.insert(key.into(), challenge).await;
    }

    /// Whether a challenge is still open for `key`, without consuming it.
    pub async fn contains(&self, key: &str) -> bool {
        self.inner.contains(key).await
    }

    /// Remove and return the challenge for `key`. A challenge is answered once.
    pub async fn take(&self, key: &str) -> Option<Challenge> {
        self.inner.remove(key).await
    }

    /// Remove challenges untouched for at least `ttl`.
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
