use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::{Mutex, oneshot};
use twilight_model::{
    http::interaction::InteractionResponse,
    id::{Id, marker::MessageMarker},
};

use ember_utils::interaction::{
    InteractionWebhook, Reply, Responder, deferred_message_response, message_response,
    pong_response, update_message_response,
};

/// Responder for interactions delivered over HTTP.
///
/// The first acknowledgement is handed to the waiting request handler and
/// becomes the HTTP response body. Anything after that goes through the
/// interaction webhook.
pub struct WebhookResponder {
    webhook: InteractionWebhook,
    initial: Mutex<Option<oneshot::Sender<InteractionResponse>>>,
}

impl WebhookResponder {
    pub fn new(webhook: InteractionWebhook, initial: oneshot::Sender<InteractionResponse>) -> Self {
        Self {
            webhook,
            initial: Mutex::new(Some(initial)),
        }
    }

    async fn take_initial(&self) -> Option<oneshot::Sender<InteractionResponse>> {
        self.initial.lock().await.take()
    }

    async fn acknowledge(&self, response: InteractionResponse) -> anyhow::Result<()> {
        let sender = self
            .take_initial()
            .await
            .ok_or_else(|| anyhow!("interaction already acknowledged"))?;

        sender
            .send(response)
            .map_err(|_| anyhow!("request closed before the interaction was acknowledged"))
    }
}

#[async_trait]
impl Responder for WebhookResponder {
    async fn pong(&self) -> anyhow::Result<()> {
        self.acknowledge(pong_response()).await
    }

    async fn reply(&self, reply: Reply) -> anyhow::Result<()> {
        match self.take_initial().await {
            Some(sender) => sender
                .send(message_response(reply))
                .map_err(|_| anyhow!("request closed before the interaction was acknowledged")),
            None => self.webhook.create_followup(&reply).await,
        }
    }

    async fn defer(&self) -> anyhow::Result<()> {
        self.acknowledge(deferred_message_response()).await
    }

    async fn edit_reply(&self, reply: Reply) -> anyhow::Result<()> {
        self.webhook.update_original(&reply).await
    }

    async fn update(&self, reply: Reply) -> anyhow::Result<()> {
        self.acknowledge(update_message_response(reply)).await
    }

    async fn edit_message(
        &self,
        message_id: Id<MessageMarker>,
        reply: Reply,
    ) -> anyhow::Result<()> {
        self.webhook.update_message(message_id, &reply).await
    }

    async fn delete_message(&self, message_id: Id<MessageMarker>) -> anyhow::Result<()> {
        self.webhook.delete_message(message_id).await
    }
}
