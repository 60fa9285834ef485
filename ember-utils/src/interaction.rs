//! Interaction replies and the delivery seam between the router and Discord.
//!
//! Handlers talk to a [`Responder`]. Gateway mode answers through the REST
//! API with [`GatewayResponder`]; webhook mode hands its first answer back as
//! the HTTP body and uses [`InteractionWebhook`] for everything after that.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use twilight_http::Client;
use twilight_model::{
    application::interaction::{
        Interaction,
        application_command::{CommandData, CommandOptionValue},
    },
    channel::message::{MessageFlags, component::Component},
    http::interaction::{InteractionResponse, InteractionResponseData, InteractionResponseType},
    id::{
        Id,
        marker::{ApplicationMarker, InteractionMarker, MessageMarker},
    },
};
use twilight_util::builder::InteractionResponseDataBuilder;

/// Message body sent back to the user: text plus optional controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub components: Vec<Component>,
    /// Visible only to the invoking user.
    pub ephemeral: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    fn flags(&self) -> Option<MessageFlags> {
        self.ephemeral.then_some(MessageFlags::EPHEMERAL)
    }

    /// Convert into interaction callback data.
    pub fn into_response_data(self) -> InteractionResponseData {
        let flags = self.flags();
        let builder = InteractionResponseDataBuilder::new()
            .content(self.content)
            .components(self.components);

        match flags {
            Some(flags) => builder.flags(flags).build(),
            None => builder.build(),
        }
    }
}

/// Callback answering a ping.
pub fn pong_response() -> InteractionResponse {
    InteractionResponse {
        kind: InteractionResponseType::Pong,
        data: None,
    }
}

/// Callback posting `reply` as a new message.
pub fn message_response(reply: Reply) -> InteractionResponse {
    InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(reply.into_response_data()),
    }
}

/// Callback acknowledging now and promising an edit later.
pub fn deferred_message_response() -> InteractionResponse {
    InteractionResponse {
        kind: InteractionResponseType::DeferredChannelMessageWithSource,
        data: None,
    }
}

/// Callback replacing the message a component is attached to.
pub fn update_message_response(reply: Reply) -> InteractionResponse {
    InteractionResponse {
        kind: InteractionResponseType::UpdateMessage,
        data: Some(reply.into_response_data()),
    }
}

/// Read a string option from a slash command invocation.
pub fn command_string_option<'a>(data: &'a CommandData, name: &str) -> Option<&'a str> {
    data.options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| match &option.value {
            CommandOptionValue::String(value) => Some(value.as_str()),
            _ => None,
        })
}

/// Everything a handler may do in answer to one interaction.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Answer a ping.
    async fn pong(&self) -> anyhow::Result<()>;

    /// Post a new message. After the interaction was acknowledged this becomes a follow-up.
    async fn reply(&self, reply: Reply) -> anyhow::Result<()>;

    /// Acknowledge now, edit the reply later with [`Responder::edit_reply`].
    async fn defer(&self) -> anyhow::Result<()>;

    /// Replace the deferred or original reply.
    async fn edit_reply(&self, reply: Reply) -> anyhow::Result<()>;

    /// Replace the message the clicked component belongs to.
    async fn update(&self, reply: Reply) -> anyhow::Result<()>;

    /// Edit an earlier message reachable through this interaction's webhook.
    async fn edit_message(&self, message_id: Id<MessageMarker>, reply: Reply)
    -> anyhow::Result<()>;

    /// Delete an earlier message reachable through this interaction's webhook.
    async fn delete_message(&self, message_id: Id<MessageMarker>) -> anyhow::Result<()>;
}

/// REST calls bound to one interaction token.
#[derive(Clone)]
pub struct InteractionWebhook {
    http: Arc<Client>,
    application_id: Id<ApplicationMarker>,
    token: String,
}

impl InteractionWebhook {
    pub fn new(
        http: Arc<Client>,
        application_id: Id<ApplicationMarker>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            application_id,
            token: token.into(),
        }
    }

    pub fn for_interaction(http: Arc<Client>, interaction: &Interaction) -> Self {
        Self::new(http, interaction.application_id, interaction.token.clone())
    }

    /// Send the initial interaction callback.
    pub async fn create_response(
        &self,
        interaction_id: Id<InteractionMarker>,
        response: &InteractionResponse,
    ) -> anyhow::Result<()> {
        self.http
            .interaction(self.application_id)
            .create_response(interaction_id, &self.token, response)
            .await?;

        Ok(())
    }

    /// Post a follow-up message.
    pub async fn create_followup(&self, reply: &Reply) -> anyhow::Result<()> {
        let client = self.http.interaction(self.application_id);
        let request = client
            .create_followup(&self.token)
            .content(&reply.content)
            .components(&reply.components);

        match reply.flags() {
            Some(flags) => request.flags(flags).await?,
            None => request.await?,
        };

        Ok(())
    }

    /// Edit the original interaction response.
    pub async fn update_original(&self, reply: &Reply) -> anyhow::Result<()> {
        self.http
            .interaction(self.application_id)
            .update_response(&self.token)
            .content(Some(reply.content.as_str()))
            .components(Some(reply.components.as_slice()))
            .await?;

        Ok(())
    }

    /// Edit a message previously sent through this webhook.
    pub async fn update_message(
        &self,
        message_id: Id<MessageMarker>,
        reply: &Reply,
    ) -> anyhow::Result<()> {
        self.http
            .interaction(self.application_id)
            .update_followup(&self.token, message_id)
            .content(Some(reply.content.as_str()))
            .components(Some(reply.components.as_slice()))
            .await?;

        Ok(())
    }

    /// Delete a message previously sent through this webhook.
    pub async fn delete_message(&self, message_id: Id<MessageMarker>) -> anyhow::Result<()> {
        self.http
            .interaction(self.application_id)
            .delete_followup(&self.token, message_id)
            .await?;

        Ok(())
    }
}

/// Responder for interactions received over the gateway.
pub struct GatewayResponder {
    webhook: InteractionWebhook,
    interaction_id: Id<InteractionMarker>,
    acknowledged: AtomicBool,
}

impl GatewayResponder {
    pub fn new(http: Arc<Client>, interaction: &Interaction) -> Self {
        Self {
            webhook: InteractionWebhook::for_interaction(http, interaction),
            interaction_id: interaction.id,
            acknowledged: AtomicBool::new(false),
        }
    }

    async fn acknowledge(&self, response: InteractionResponse) -> anyhow::Result<()> {
        self.webhook
            .create_response(self.interaction_id, &response)
            .await?;
        self.acknowledged.store(true, Ordering::SeqCst);

        Ok(())
    }
}

#[async_trait]
impl Responder for GatewayResponder {
    async fn pong(&self) -> anyhow::Result<()> {
        self.acknowledge(pong_response()).await
    }

    async fn reply(&self, reply: Reply) -> anyhow::Result<()> {
        if self.acknowledged.load(Ordering::SeqCst) {
            return self.webhook.create_followup(&reply).await;
        }

        self.acknowledge(message_response(reply)).await
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
