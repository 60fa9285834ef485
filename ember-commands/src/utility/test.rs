use ember_utils::emoji::random_emoji;
use ember_utils::interaction::{Reply, Responder};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "test",
    desc: "Basic command",
};

/// Send a simple connectivity response.
pub async fn run(responder: &dyn Responder) -> anyhow::Result<()> {
    let content = format!("Ember is awake {}", random_emoji());
    responder.reply(Reply::text(content)).await
}
