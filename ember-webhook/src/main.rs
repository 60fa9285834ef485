use std::{net::SocketAddr, sync::Arc};

use tracing::info;
use twilight_http::Client;

use ember_core::runtime::{init_tracing, install_crypto_provider};
use ember_core::{Config, Context, FakerClient};
use ember_webhook::{AppState, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    install_crypto_provider();

    let config = Config::from_env()?;

    let http = Arc::new(Client::new(config.discord_token.clone()));
    let people = Arc::new(FakerClient::new(config.faker_base_url.clone()));
    let ctx = Context::new(people, config.settings);

    if let Some(ttl) = config.session_ttl {
        info!(?ttl, "idle session eviction enabled");
        let _eviction = ctx.spawn_eviction(ttl);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Ember is listening for interactions");

    axum::serve(listener, app(AppState::new(ctx, http))).await?;

    Ok(())
}
