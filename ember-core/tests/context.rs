use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use ember_core::{Context, FetchError, PeopleSource, Settings};
use ember_store::{Challenge, Person};

struct NoPeople;

#[async_trait]
impl PeopleSource for NoPeople {
    async fn fetch(&self, _quantity: u8) -> Result<Vec<Person>, FetchError> {
        Ok(Vec::new())
    }
}

async fn seeded() -> Context {
    let ctx = Context::new(Arc::new(NoPeople), Settings::default());
    ctx.sessions.create("1", Vec::new(), 3).await;
    ctx.challenges
        .create(
            "2",
            Challenge {
                challenger_id: 7,
                choice: "rock".to_owned(),
            },
        )
        .await;
    ctx
}

#[tokio::test]
async fn clones_share_stores() {
    let ctx = seeded().await;
    let other = ctx.clone();

    assert!(other.sessions.get("1").await.is_some());
    assert!(other.challenges.contains("2").await);
}

#[tokio::test]
async fn evict_idle_keeps_recent_state() {
    let ctx = seeded().await;

    assert_eq!(ctx.evict_idle(Duration::from_secs(3600)).await, (0, 0));
    assert_eq!(ctx.sessions.len().await, 1);
    assert_eq!(ctx.challenges.len().await, 1);
}

#[tokio::test]
async fn evict_idle_drops_stale_state() {
    let ctx = seeded().await;

    assert_eq!(ctx.evict_idle(Duration::ZERO).await, (1, 1));
    assert!(ctx.sessions.is_empty().await);
    assert!(ctx.challenges.is_empty().await);
}

#[tokio::test]
async fn background_eviction_runs() {
    let ctx = seeded().await;
    let handle = ctx.spawn_eviction(Duration::from_millis(10));

    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.abort();

    assert!(ctx.sessions.is_empty().await);
    assert!(ctx.challenges.is_empty().await);
}
