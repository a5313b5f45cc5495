//! Application command definitions registered with Discord

use serde::Serialize;

pub const COMMAND_GETCOIN: &str = "getcoin";
pub const COMMAND_SUMMARY: &str = "summary";
pub const COMMAND_PROFILE: &str = "profile";

pub const OPTION_COIN: &str = "coin";

const CHAT_INPUT: u8 = 1;
const OPTION_STRING: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOptionDefinition {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandDefinition {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionDefinition>,
}

fn coin_option() -> CommandOptionDefinition {
    CommandOptionDefinition {
        kind: OPTION_STRING,
        name: OPTION_COIN.to_string(),
        description: "Coin ticker, e.g. BTC".to_string(),
        required: true,
    }
}

/// Every slash command the bot answers
pub fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            kind: CHAT_INPUT,
            name: COMMAND_GETCOIN.to_string(),
            description: "Weighted 30/60/90 day price bands and signal".to_string(),
            options: vec![coin_option()],
        },
        CommandDefinition {
            kind: CHAT_INPUT,
            name: COMMAND_SUMMARY.to_string(),
            description: "60 day stats combining the first and last 30 days".to_string(),
            options: vec![coin_option()],
        },
        CommandDefinition {
            kind: CHAT_INPUT,
            name: COMMAND_PROFILE.to_string(),
            description: "Set up your gaming profile".to_string(),
            options: Vec::new(),
        },
    ]
}
