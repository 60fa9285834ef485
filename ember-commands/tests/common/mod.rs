//! Test doubles and payload builders shared by router tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::{Value, json};
use twilight_model::{
    application::interaction::Interaction,
    id::{Id, marker::MessageMarker},
};

use ember_core::{Context, FetchError, PeopleSource, Settings};
use ember_store::Person;
use ember_utils::interaction::{Reply, Responder};

pub const APPLICATION_ID: u64 = 100;
pub const CHALLENGER_ID: u64 = 501;
pub const OPPONENT_ID: u64 = 502;

/// Everything a handler sent, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sent {
    Pong,
    Reply(Reply),
    Defer,
    EditReply(Reply),
    Update(Reply),
    EditMessage(u64, Reply),
    DeleteMessage(u64),
}

#[derive(Default)]
pub struct RecordingResponder {
    pub(crate) sent: Mutex<Vec<Sent>>,
    pub fail_defer: bool,
    pub fail_edit_reply: bool,
    pub fail_delete: bool,
}

impl RecordingResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn pong(&self) -> anyhow::Result<()> {
        self.record(Sent::Pong)
    }

    async fn reply(&self, reply: Reply) -> anyhow::Result<()> {
        self.record(Sent::Reply(reply))
    }

    async fn defer(&self) -> anyhow::Result<()> {
        if self.fail_defer {
            return Err(anyhow!("defer rejected"));
        }
        self.record(Sent::Defer)
    }

    async fn edit_reply(&self, reply: Reply) -> anyhow::Result<()> {
        if self.fail_edit_reply {
            return Err(anyhow!("edit rejected"));
        }
        self.record(Sent::EditReply(reply))
    }

    async fn update(&self, reply: Reply) -> anyhow::Result<()> {
        self.record(Sent::Update(reply))
    }

    async fn edit_message(
        &self,
        message_id: Id<MessageMarker>,
        reply: Reply,
    ) -> anyhow::Result<()> {
        self.record(Sent::EditMessage(message_id.get(), reply))
    }

    async fn delete_message(&self, message_id: Id<MessageMarker>) -> anyhow::Result<()> {
        if self.fail_delete {
            return Err(anyhow!("delete rejected"));
        }
        self.record(Sent::DeleteMessage(message_id.get()))
    }
}

/// In-memory people source that remembers requested quantities.
pub struct FakePeople {
    outcome: Result<Vec<Person>, u16>,
    requests: Mutex<Vec<u8>>,
}

impl FakePeople {
    pub fn returning(people: Vec<Person>) -> Self {
        Self {
            outcome: Ok(people),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            outcome: Err(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<u8> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PeopleSource for FakePeople {
    async fn fetch(&self, quantity: u8) -> Result<Vec<Person>, FetchError> {
        self.requests.lock().unwrap().push(quantity);
        match &self.outcome {
            Ok(people) => Ok(people.iter().take(quantity.into()).cloned().collect()),
            Err(status) => Err(FetchError::Upstream { status: *status }),
        }
    }
}

pub fn people(count: usize) -> Vec<Person> {
    (1..=count)
        .map(|index| Person {
            uuid: format!("uuid-{index}"),
            first_name: format!("First{index}"),
            last_name: format!("Last{index}"),
            birthday: "1999-09-09".to_owned(),
        })
        .collect()
}

pub fn context(source: Arc<FakePeople>) -> Context {
    Context::new(source, Settings::default())
}

fn user(id: u64) -> Value {
    json!({
        "id": id.to_string(),
        "username": format!("user{id}"),
        "discriminator": "0",
        "avatar": null,
        "global_name": null
    })
}

fn message(id: u64) -> Value {
    json!({
        "attachments": [],
        "author": user(APPLICATION_ID),
        "channel_id": "300",
        "components": [],
        "content": "",
        "edited_timestamp": null,
        "embeds": [],
        "id": id.to_string(),
        "mention_everyone": false,
        "mention_roles": [],
        "mentions": [],
        "pinned": false,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "tts": false,
        "type": 0
    })
}

fn interaction(id: u64, kind: u8, user_id: u64, extra: Value) -> Interaction {
    let mut payload = json!({
        "id": id.to_string(),
        "application_id": APPLICATION_ID.to_string(),
        "type": kind,
        "token": format!("token-{id}"),
        "version": 1,
        "entitlements": [],
        "authorizing_integration_owners": {},
        "user": user(user_id)
    });

    if let (Some(target), Value::Object(fields)) = (payload.as_object_mut(), extra) {
        target.extend(fields);
    }

    serde_json::from_value(payload).expect("valid interaction payload")
}

pub fn ping(id: u64) -> Interaction {
    interaction(id, 1, CHALLENGER_ID, json!({}))
}

/// Slash command invocation with `(name, string value)` options.
pub fn command(id: u64, user_id: u64, name: &str, options: &[(&str, &str)]) -> Interaction {
    let options: Vec<Value> = options
        .iter()
        .map(|(name, value)| json!({ "name": name, "type": 3, "value": value }))
        .collect();

    interaction(
        id,
        2,
        user_id,
        json!({
            "data": { "id": "900", "name": name, "type": 1, "options": options }
        }),
    )
}

pub fn button(id: u64, user_id: u64, custom_id: &str, message_id: u64) -> Interaction {
    interaction(
        id,
        3,
        user_id,
        json!({
            "data": { "custom_id": custom_id, "component_type": 2, "values": [] },
            "message": message(message_id)
        }),
    )
}

pub fn select(
    id: u64,
    user_id: u64,
    custom_id: &str,
    values: &[&str],
    message_id: u64,
) -> Interaction {
    interaction(
        id,
        3,
        user_id,
        json!({
            "data": { "custom_id": custom_id, "component_type": 3, "values": values },
            "message": message(message_id)
        }),
    )
}
