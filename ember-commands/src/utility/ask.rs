use tracing::{debug, error, info, warn};
use twilight_model::application::interaction::{Interaction, application_command::CommandData};

use ember_core::Context;
use ember_utils::interaction::{Reply, Responder, command_string_option};
use ember_utils::pagination::{ComponentToken, advance, build_nav_components, render};
use ember_utils::parse::parse_quantity;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "ask",
    desc: "Ask for birthday data - include a number in your message (e.g., 'get me 5 people')",
};

/// Name of the free-text option carrying the request.
pub const MESSAGE_OPTION: &str = "message";

/// Reply when the API answered with no records.
pub const EMPTY_RESULT_MESSAGE: &str = "Sorry, couldn't fetch data from the API.";
/// Reply when the API call failed.
pub const FETCH_ERROR_MESSAGE: &str = "Sorry, there was an error fetching data from the API.";

/// Fetch people and open a pagination session for them.
///
/// Inputs:
/// - optional `message` text; its first number picks how many people to fetch.
///
/// Error behavior:
/// - an out-of-range number gets an ephemeral validation message.
/// - API failures get a fixed apology, delivered once.
pub async fn run(
    ctx: &Context,
    interaction: &Interaction,
    data: &CommandData,
    responder: &dyn Responder,
) -> anyhow::Result<()> {
    let raw_request = command_string_option(data, MESSAGE_OPTION);
    let quantity = match parse_quantity(raw_request, ctx.settings.default_quantity) {
        Ok(quantity) => quantity,
        Err(rejection) => {
            info!(%rejection, "rejected ask request");
            return responder
                .reply(Reply::text(rejection.to_string()).ephemeral())
                .await;
        }
    };

    let deferred = match responder.defer().await {
        Ok(()) => true,
        Err(source) => {
            warn!(?source, "failed to defer ask reply");
            false
        }
    };

    let reply = match ctx.people.fetch(quantity).await {
        Ok(people) if people.is_empty() => {
            warn!(quantity, "people API returned no records");
            Reply::text(EMPTY_RESULT_MESSAGE)
        }
        Ok(people) => {
            let key = interaction.id.to_string();
            let session = ctx
                .sessions
                .create(key.clone(), people, ctx.settings.items_per_page)
                .await;
            let view = render(&session);
            debug!(%key, total_pages = view.total_pages, "pagination session created");

            Reply::text(view.text.clone()).with_components(build_nav_components(&key, &view))
        }
        Err(source) => {
            error!(?source, quantity, "failed to fetch people");
            Reply::text(FETCH_ERROR_MESSAGE)
        }
    };

    deliver(responder, deferred, reply).await
}

/// Edit the deferred reply, falling back to a direct reply if that fails.
async fn deliver(responder: &dyn Responder, deferred: bool, reply: Reply) -> anyhow::Result<()> {
    if deferred {
        match responder.edit_reply(reply.clone()).await {
            Ok(()) => return Ok(()),
            Err(source) => warn!(?source, "editing deferred reply failed, replying directly"),
        }
    }

    responder.reply(reply).await
}

/// Handle previous/next button presses on an `/ask` result.
pub async fn handle_pagination_interaction(
    ctx: &Context,
    token: &ComponentToken,
    responder: &dyn Responder,
) -> anyhow::Result<()> {
    let Some(direction) = token.action.direction() else {
        return Ok(());
    };

    let Some(session) = ctx
        .sessions
        .update(&token.key, |session| {
            advance(session, direction);
        })
        .await
    else {
        debug!(key = %token.key, "pagination session not found");
        return Ok(());
    };

    let view = render(&session);
    let components = build_nav_components(&token.key, &view);

    responder
        .update(Reply::text(view.text).with_components(components))
        .await
}
