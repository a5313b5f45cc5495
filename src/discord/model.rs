//! Discord interaction payloads (API v10)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MESSAGE_FLAG_EPHEMERAL: u64 = 1 << 6;

pub const COMPONENT_ACTION_ROW: u8 = 1;
pub const COMPONENT_STRING_SELECT: u8 = 3;
pub const COMPONENT_TEXT_INPUT: u8 = 4;

pub const TEXT_INPUT_SHORT: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Ping,
    ApplicationCommand,
    MessageComponent,
    Autocomplete,
    ModalSubmit,
    Unknown(u8),
}

impl From<u8> for InteractionKind {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionKind::Ping,
            2 => InteractionKind::ApplicationCommand,
            3 => InteractionKind::MessageComponent,
            4 => InteractionKind::Autocomplete,
            5 => InteractionKind::ModalSubmit,
            other => InteractionKind::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedInput {
    pub custom_id: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedRow {
    #[serde(default)]
    pub components: Vec<SubmittedInput>,
}

/// Union of command, component and modal-submit data
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub components: Vec<SubmittedRow>,
}

impl InteractionData {
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| o.value.as_ref())
            .and_then(Value::as_str)
    }

    /// Value of a text input submitted in a modal
    pub fn submitted_value(&self, custom_id: &str) -> Option<&str> {
        self.components
            .iter()
            .flat_map(|row| row.components.iter())
            .find(|input| input.custom_id == custom_id)
            .and_then(|input| input.value.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub application_id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<InteractionData>,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub member: Option<Member>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: String,
}

impl Interaction {
    pub fn kind(&self) -> InteractionKind {
        InteractionKind::from(self.kind)
    }

    /// Invoking user; `member.user` in guilds, `user` in DMs
    pub fn user(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|m| m.user.as_ref())
            .or(self.user.as_ref())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user().map(|u| u.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Embed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter { text: text.into() });
        self
    }

    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Outgoing message component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    ActionRow {
        #[serde(rename = "type")]
        kind: u8,
        components: Vec<Component>,
    },
    StringSelect {
        #[serde(rename = "type")]
        kind: u8,
        custom_id: String,
        placeholder: String,
        min_values: usize,
        max_values: usize,
        options: Vec<SelectOption>,
    },
    TextInput {
        #[serde(rename = "type")]
        kind: u8,
        custom_id: String,
        label: String,
        style: u8,
        placeholder: String,
        required: bool,
        max_length: usize,
    },
}

impl Component {
    pub fn action_row(components: Vec<Component>) -> Self {
        Component::ActionRow {
            kind: COMPONENT_ACTION_ROW,
            components,
        }
    }

    pub fn string_select(
        custom_id: impl Into<String>,
        placeholder: impl Into<String>,
        labels: &[String],
        min_values: usize,
        max_values: usize,
    ) -> Self {
        Component::StringSelect {
            kind: COMPONENT_STRING_SELECT,
            custom_id: custom_id.into(),
            placeholder: placeholder.into(),
            min_values,
            max_values,
            options: labels
                .iter()
                .map(|label| SelectOption {
                    label: label.clone(),
                    value: label.clone(),
                })
                .collect(),
        }
    }

    pub fn short_text_input(
        custom_id: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Component::TextInput {
            kind: COMPONENT_TEXT_INPUT,
            custom_id: custom_id.into(),
            label: label.into(),
            style: TEXT_INPUT_SHORT,
            placeholder: placeholder.into(),
            required: true,
            max_length: 32,
        }
    }
}

/// Body of a message sent as an interaction response or follow-up
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl MessageData {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn embed(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
            ..Default::default()
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.flags = Some(MESSAGE_FLAG_EPHEMERAL);
        self
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalData {
    pub custom_id: String,
    pub title: String,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Message(MessageData),
    Modal(ModalData),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self { kind: 1, data: None }
    }

    pub fn message(data: MessageData) -> Self {
        Self {
            kind: 4,
            data: Some(ResponseData::Message(data)),
        }
    }

    /// "Bot is thinking..." placeholder; the answer follows via webhook
    pub fn deferred_message() -> Self {
        Self { kind: 5, data: None }
    }

    /// Acknowledge a component interaction without changing anything
    pub fn deferred_update() -> Self {
        Self { kind: 6, data: None }
    }

    pub fn modal(data: ModalData) -> Self {
        Self {
            kind: 9,
            data: Some(ResponseData::Modal(data)),
        }
    }
}
