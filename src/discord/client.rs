//! Discord REST client: command registration and interaction follow-ups

use reqwest::{Client, Response};
use tracing::{debug, info};
use url::Url;

use super::commands::CommandDefinition;
use super::model::MessageData;
use crate::config::DiscordConfig;
use crate::error::DiscordError;

#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: Client,
    api_base: String,
    application_id: String,
    token: String,
}

impl DiscordClient {
    pub fn new(config: &DiscordConfig, http: Client) -> Self {
        Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            application_id: config.application_id.clone(),
            token: config.token.clone(),
        }
    }

    fn url(&self, path: &str) -> Result<Url, DiscordError> {
        Ok(Url::parse(&format!("{}/{}", self.api_base, path))?)
    }

    async fn check(response: Response) -> Result<Response, DiscordError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(DiscordError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Replace the application's commands, guild-scoped when `guild_id` is set
    pub async fn register_commands(
        &self,
        guild_id: Option<u64>,
        commands: &[CommandDefinition],
    ) -> Result<usize, DiscordError> {
        let path = match guild_id {
            Some(guild) => format!("applications/{}/guilds/{}/commands", self.application_id, guild),
            None => format!("applications/{}/commands", self.application_id),
        };
        let response = self
            .http
            .put(self.url(&path)?)
            .header("Authorization", format!("Bot {}", self.token))
            .json(commands)
            .send()
            .await?;
        Self::check(response).await?;

        info!(
            count = commands.len(),
            guild_id = ?guild_id,
            "Synced {} slash commands",
            commands.len()
        );
        Ok(commands.len())
    }

    /// Post a follow-up message to a deferred interaction
    pub async fn create_followup(
        &self,
        interaction_token: &str,
        message: &MessageData,
    ) -> Result<(), DiscordError> {
        let path = format!("webhooks/{}/{}", self.application_id, interaction_token);
        let response = self
            .http
            .post(self.url(&path)?)
            .json(message)
            .send()
            .await?;
        Self::check(response).await?;
        debug!("Delivered interaction follow-up");
        Ok(())
    }
}
