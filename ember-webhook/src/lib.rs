//! HTTP front-end answering Discord interactions posted to `/interactions`.

mod responder;

use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;
use tokio::{sync::oneshot, time::timeout};
use tracing::{error, warn};
use twilight_http::Client;
use twilight_model::application::interaction::Interaction;

use ember_commands::handle_interaction;
use ember_core::Context;
use ember_utils::interaction::InteractionWebhook;

pub use responder::WebhookResponder;

/// Discord gives up on an interaction that is not acknowledged within three seconds.
const ACKNOWLEDGE_TIMEOUT: Duration = Duration::from_secs(3);

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub ctx: Context,
    pub http: Arc<Client>,
}

impl AppState {
    pub fn new(ctx: Context, http: Arc<Client>) -> Self {
        Self { ctx, http }
    }
}

/// Router exposing `POST /interactions`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/interactions", post(interactions))
        .with_state(state)
}

async fn interactions(
    State(state): State<AppState>,
    Json(interaction): Json<Interaction>,
) -> Response {
    let (sender, receiver) = oneshot::channel();
    let webhook = InteractionWebhook::for_interaction(Arc::clone(&state.http), &interaction);
    let responder = WebhookResponder::new(webhook, sender);
    let ctx = state.ctx;

    // Keeps running after the body is returned so deferred edits can finish
    tokio::spawn(async move {
        if let Err(source) = handle_interaction(&ctx, &interaction, &responder).await {
            error!(?source, id = %interaction.id, "failed to handle interaction");
        }
    });

    match timeout(ACKNOWLEDGE_TIMEOUT, receiver).await {
        Ok(Ok(response)) => Json(response).into_response(),
        Ok(Err(_)) => unhandled(),
        Err(_) => {
            warn!("interaction was not acknowledged in time");
            unhandled()
        }
    }
}

fn unhandled() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "unhandled interaction" })),
    )
        .into_response()
}
