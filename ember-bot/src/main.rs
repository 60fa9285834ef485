use std::sync::Arc;

use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use ember_commands::handle_interaction;
use ember_core::runtime::{init_tracing, install_crypto_provider};
use ember_core::{Config, Context, FakerClient};
use ember_utils::interaction::GatewayResponder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    install_crypto_provider();

    let config = Config::from_env()?;

    // One HTTP client shared by every interaction task
    let http = Arc::new(Client::new(config.discord_token.clone()));
    let people = Arc::new(FakerClient::new(config.faker_base_url.clone()));
    let ctx = Context::new(people, config.settings);

    if let Some(ttl) = config.session_ttl {
        info!(?ttl, "idle session eviction enabled");
        let _eviction = ctx.spawn_eviction(ttl);
    }

    // Interactions arrive regardless of intents
    let mut shard = Shard::new(ShardId::new(0, 1), config.discord_token, Intents::GUILDS);

    info!("Ember is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(ready) => {
                info!(user = %ready.user.name, "Ember has successfully awoken!");
            }
            Event::InteractionCreate(interaction) => {
                let ctx = ctx.clone();
                let http = Arc::clone(&http);

                tokio::spawn(async move {
                    let interaction = interaction.0;
                    let responder = GatewayResponder::new(http, &interaction);

                    if let Err(source) = handle_interaction(&ctx, &interaction, &responder).await {
                        error!(?source, id = %interaction.id, "failed to handle interaction");
                    }
                });
            }
            _ => {} // Ignore unused events
        }
    }

    Ok(())
}
