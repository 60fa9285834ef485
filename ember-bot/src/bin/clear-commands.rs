//! Remove every slash command registered for the application.

use tracing::info;
use twilight_http::Client;

use ember_core::Config;
use ember_core::runtime::{init_tracing, install_crypto_provider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    install_crypto_provider();

    let config = Config::from_env()?;
    let application_id = config.require_application_id()?;

    let http = Client::new(config.discord_token);
    let interaction = http.interaction(application_id);

    interaction.set_global_commands(&[]).await?;
    info!("cleared global commands");

    if let Some(guild_id) = config.guild_id {
        interaction.set_guild_commands(guild_id, &[]).await?;
        info!(%guild_id, "cleared guild commands");
    }

    Ok(())
}
