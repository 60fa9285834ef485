use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;
use tracing::debug;

use ember_store::{ChallengeStore, SessionStore};

/// Environment-driven configuration.
pub mod config;
/// Domain error types.
pub mod error;
/// Client for the external people API.
pub mod people;
/// Process setup shared by every binary.
pub mod runtime;

pub use config::{Config, Settings};
pub use error::{ConfigError, FetchError, ValidationError};
pub use people::{FakerClient, PeopleSource};

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub sessions: SessionStore,
    pub challenges: ChallengeStore,
    pub people: Arc<dyn PeopleSource>,
    pub settings: Settings,
}

impl Context {
    /// Create a new application context with empty stores.
    pub fn new(people: Arc<dyn PeopleSource>, settings: Settings) -> Self {
        Self {
            sessions: SessionStore::new(),
            challenges: ChallengeStore::new(),
            people,
            settings,
        }
    }
}

impl Context {
    /// Drop sessions and challenges nobody touched within `ttl`.
    ///
    /// Returns how many sessions and challenges were removed.
    pub async fn evict_idle(&self, ttl: Duration) -> (usize, usize) {
        let sessions = self.sessions.evict_older_than(ttl).await;
        let challenges = self.challenges.evict_older_than(ttl).await;
        (sessions, challenges)
    }

    /// Run [`Context::evict_idle`] in the background, checking every `ttl`.
    pub fn spawn_eviction(&self, ttl: Duration) -> JoinHandle<()> {
        let ctx = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(ttl);
            loop {
                ticker.tick().await;
                let (sessions, challenges) = ctx.evict_idle(ttl).await;
                if sessions + challenges > 0 {
                    debug!(sessions, challenges, "evicted idle state");
                }
            }
        })
    }
}
