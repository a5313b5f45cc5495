//! Reply delivery
//!
//! Command pipelines produce a `Reply` and hand it to a `ReplySink`; the sink
//! decides where it goes (a Discord follow-up webhook or a terminal).

use std::io::Write;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::discord::{DiscordClient, Embed, MessageData};
use crate::presenter::render_text;

pub type ReplyError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Embed(Embed),
}

impl Reply {
    pub fn into_message(self) -> MessageData {
        match self {
            Reply::Text(text) => MessageData::text(text),
            Reply::Embed(embed) => MessageData::embed(embed),
        }
    }

    pub fn to_plain_text(&self) -> String {
        match self {
            Reply::Text(text) => text.clone(),
            Reply::Embed(embed) => render_text(embed),
        }
    }
}

#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Deliver a reply for the request this sink was created for
    async fn deliver(&self, reply: Reply) -> Result<(), ReplyError>;
}

/// Follow-up to a deferred slash command
pub struct InteractionFollowup {
    client: DiscordClient,
    token: String,
}

impl InteractionFollowup {
    pub fn new(client: DiscordClient, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }
}

#[async_trait]
impl ReplySink for InteractionFollowup {
    async fn deliver(&self, reply: Reply) -> Result<(), ReplyError> {
        self.client
            .create_followup(&self.token, &reply.into_message())
            .await?;
        Ok(())
    }
}

/// Writes replies as plain text, one block per reply
pub struct ConsoleReply<W> {
    out: Mutex<W>,
}

impl ConsoleReply<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleReply<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send> ReplySink for ConsoleReply<W> {
    async fn deliver(&self, reply: Reply) -> Result<(), ReplyError> {
        let mut out = self.out.lock().await;
        writeln!(out, "{}", reply.to_plain_text())?;
        out.flush()?;
        Ok(())
    }
}
