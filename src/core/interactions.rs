//! Dispatch of verified Discord interactions

use tracing::{debug, error, info, warn};

use crate::commands::coin::{self, CoinCommand, Outcome};
use crate::commands::profile;
use crate::commands::reply::InteractionFollowup;
use crate::core::context::AppContext;
use crate::discord::commands::{COMMAND_GETCOIN, COMMAND_PROFILE, COMMAND_SUMMARY, OPTION_COIN};
use crate::discord::{Interaction, InteractionKind, InteractionResponse, MessageData};
use crate::error::ProfileError;

fn ephemeral(text: impl Into<String>) -> InteractionResponse {
    InteractionResponse::message(MessageData::text(text).ephemeral())
}

/// Produce the immediate response for an interaction. Slow work is spawned
/// and answered through a follow-up.
pub async fn dispatch(ctx: &AppContext, interaction: Interaction) -> InteractionResponse {
    match interaction.kind() {
        InteractionKind::Ping => InteractionResponse::pong(),
        InteractionKind::ApplicationCommand => handle_command(ctx, interaction).await,
        InteractionKind::MessageComponent | InteractionKind::ModalSubmit => {
            handle_profile_step(ctx, interaction).await
        }
        other => {
            debug!(kind = ?other, "Ignoring unsupported interaction type");
            InteractionResponse::deferred_update()
        }
    }
}

async fn handle_command(ctx: &AppContext, interaction: Interaction) -> InteractionResponse {
    let data = interaction.data.clone().unwrap_or_default();
    let name = data.name.clone().unwrap_or_default();
    ctx.metrics.commands_total.with_label_values(&[name.as_str()]).inc();
    info!(
        command = %name,
        user = interaction.user().map(|u| u.username.as_str()).unwrap_or_default(),
        guild_id = ?interaction.guild_id,
        channel_id = ?interaction.channel_id,
        "Slash command received"
    );

    let command = match name.as_str() {
        COMMAND_GETCOIN => CoinCommand::Weighted,
        COMMAND_SUMMARY => CoinCommand::Summary,
        COMMAND_PROFILE => return start_profile(ctx, &interaction).await,
        _ => {
            warn!(command = %name, "Unknown command");
            return ephemeral("Unknown command.");
        }
    };

    let Some(coin) = data.string_option(OPTION_COIN).map(str::to_string) else {
        return ephemeral("Please provide a coin ticker, e.g. BTC.");
    };

    let ctx = ctx.clone();
    let token = interaction.token.clone();
    tokio::spawn(async move {
        let sink = InteractionFollowup::new(ctx.discord.clone(), token);
        match coin::execute(command, &coin, ctx.provider.as_ref(), &ctx.market, &sink).await {
            Ok(Outcome::Report) => {}
            Ok(Outcome::Failed) => ctx.metrics.price_fetch_failures_total.inc(),
            Err(e) => error!(command = command.name(), coin = %coin, error = %e, "Failed to deliver follow-up"),
        }
    });

    InteractionResponse::deferred_message()
}

async fn start_profile(ctx: &AppContext, interaction: &Interaction) -> InteractionResponse {
    let Some(user_id) = interaction.user_id() else {
        return ephemeral("Could not identify you.");
    };
    let flow = ctx.sessions.start(&interaction.id, user_id).await;
    ctx.metrics
        .profile_sessions_active
        .set(ctx.sessions.len().await as i64);
    profile::prompt(&interaction.id, &flow)
}

async fn handle_profile_step(ctx: &AppContext, interaction: Interaction) -> InteractionResponse {
    let data = interaction.data.clone().unwrap_or_default();
    let Some(target) = data.custom_id.as_deref().and_then(profile::parse_custom_id) else {
        return InteractionResponse::deferred_update();
    };
    let Some(user_id) = interaction.user_id() else {
        return InteractionResponse::deferred_update();
    };

    let result = ctx
        .sessions
        .advance(target.session_id, user_id, |current| {
            profile::input_for(&target, current, &data)
        })
        .await;
    ctx.metrics
        .profile_sessions_active
        .set(ctx.sessions.len().await as i64);

    match result {
        Ok(flow) => {
            if let Some(saved) = flow.saved() {
                info!(
                    user_id = %user_id,
                    nickname = %saved.nickname,
                    games = ?saved.games,
                    timezone = %saved.timezone,
                    preferences = ?saved.preferences,
                    "Profile saved"
                );
            } else {
                debug!(user_id = %user_id, stage = flow.stage().as_str(), "Profile dialog advanced");
            }
            profile::prompt(target.session_id, &flow)
        }
        Err(ProfileError::Expired) => InteractionResponse::deferred_update(),
        Err(ProfileError::NotOwner) => ephemeral("This profile dialog belongs to someone else."),
        Err(e) => {
            debug!(user_id = %user_id, error = %e, "Profile input rejected");
            ephemeral(format!("{}. Please try again.", capitalize(&e.to_string())))
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
