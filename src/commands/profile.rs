//! Discord rendering of the profile dialog

use crate::discord::{Component, InteractionData, InteractionResponse, MessageData, ModalData};
use crate::error::ProfileError;
use crate::models::profile::{timezones, GAMES, MAX_SELECT_OPTIONS, PREFERENCES};
use crate::models::{ProfileFlow, ProfileInput, ProfileStage};

const CUSTOM_ID_PREFIX: &str = "profile";
pub const NICKNAME_INPUT_ID: &str = "nickname";

/// Which dialog a component belongs to and the step it was rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTarget<'a> {
    pub stage: ProfileStage,
    pub session_id: &'a str,
}

/// `profile:<stage>:<session>`
pub fn custom_id(stage: ProfileStage, session_id: &str) -> String {
    format!("{}:{}:{}", CUSTOM_ID_PREFIX, stage.as_str(), session_id)
}

pub fn parse_custom_id(custom_id: &str) -> Option<StepTarget<'_>> {
    let mut parts = custom_id.splitn(3, ':');
    if parts.next()? != CUSTOM_ID_PREFIX {
        return None;
    }
    let stage = ProfileStage::parse(parts.next()?)?;
    let session_id = parts.next().filter(|id| !id.is_empty())?;
    Some(StepTarget { stage, session_id })
}

fn labels(options: &[&str]) -> Vec<String> {
    options
        .iter()
        .take(MAX_SELECT_OPTIONS)
        .map(|s| s.to_string())
        .collect()
}

fn select_prompt(
    text: &str,
    stage: ProfileStage,
    session_id: &str,
    placeholder: &str,
    options: Vec<String>,
    min_values: usize,
    max_values: usize,
) -> InteractionResponse {
    let select = Component::string_select(
        custom_id(stage, session_id),
        placeholder,
        &options,
        min_values,
        max_values.min(options.len()),
    );
    InteractionResponse::message(
        MessageData::text(text)
            .ephemeral()
            .with_components(vec![Component::action_row(vec![select])]),
    )
}

/// Response that presents the step `flow` is waiting on
pub fn prompt(session_id: &str, flow: &ProfileFlow) -> InteractionResponse {
    match flow.stage() {
        ProfileStage::AwaitingGames => select_prompt(
            "Select your games:",
            ProfileStage::AwaitingGames,
            session_id,
            "Choose your games...",
            labels(&GAMES),
            1,
            GAMES.len(),
        ),
        ProfileStage::AwaitingTimezone => select_prompt(
            "Select your timezone:",
            ProfileStage::AwaitingTimezone,
            session_id,
            "Select your timezone...",
            timezones(),
            1,
            1,
        ),
        ProfileStage::AwaitingPreferences => select_prompt(
            "Now choose your preferences:",
            ProfileStage::AwaitingPreferences,
            session_id,
            "Select your preferences...",
            labels(&PREFERENCES),
            0,
            PREFERENCES.len(),
        ),
        ProfileStage::AwaitingNickname => InteractionResponse::modal(ModalData {
            custom_id: custom_id(ProfileStage::AwaitingNickname, session_id),
            title: "Save Your Profile".to_string(),
            components: vec![Component::action_row(vec![Component::short_text_input(
                NICKNAME_INPUT_ID,
                "Your Discord Nickname",
                "Enter a nickname",
            )])],
        }),
        ProfileStage::Complete => {
            let text = flow
                .saved()
                .map(|profile| profile.confirmation())
                .unwrap_or_else(|| "Profile saved!".to_string());
            InteractionResponse::message(MessageData::text(text).ephemeral())
        }
    }
}

/// Interpret an interaction payload as the input the current step expects.
/// Components rendered for an earlier step are rejected.
pub fn input_for(
    target: &StepTarget<'_>,
    current: ProfileStage,
    data: &InteractionData,
) -> Result<ProfileInput, ProfileError> {
    if target.stage != current {
        return Err(ProfileError::UnexpectedInput);
    }
    match current {
        ProfileStage::AwaitingGames => Ok(ProfileInput::Games(data.values.clone())),
        ProfileStage::AwaitingTimezone => Ok(ProfileInput::Timezone(data.values.clone())),
        ProfileStage::AwaitingPreferences => Ok(ProfileInput::Preferences(data.values.clone())),
        ProfileStage::AwaitingNickname => data
            .submitted_value(NICKNAME_INPUT_ID)
            .map(|value| ProfileInput::Nickname(value.to_string()))
            .ok_or(ProfileError::UnexpectedInput),
        ProfileStage::Complete => Err(ProfileError::AlreadyComplete),
    }
}
