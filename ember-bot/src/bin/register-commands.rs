//! Overwrite the application's slash commands with the ones Ember serves.

use tracing::info;
use twilight_http::Client;

use ember_commands::definitions::command_definitions;
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
    let commands = command_definitions()?;

    match config.guild_id {
        Some(guild_id) => {
            interaction.set_guild_commands(guild_id, &commands).await?;
            info!(%guild_id, count = commands.len(), "registered guild commands");
        }
        None => {
            interaction.set_global_commands(&commands).await?;
            info!(count = commands.len(), "registered global commands");
        }
    }

    Ok(())
}
