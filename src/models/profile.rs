//! Profile dialog state machine
//!
//! The dialog is linear: games, timezone, preferences, nickname. Each step is
//! a pure transition from the current flow plus one user input to the next
//! flow; the interaction layer only stores flows and renders prompts.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

pub const GAMES: [&str; 8] = [
    "Minecraft",
    "League of Legends",
    "Valorant",
    "Apex Legends",
    "Fortnite",
    "CS:GO",
    "Roblox",
    "Overwatch",
];

pub const PREFERENCES: [&str; 4] = [
    "No Microphone",
    "Ranked Games Only",
    "Casual Games Only",
    "Streamer Friendly",
];

/// Discord caps select menus at 25 options
pub const MAX_SELECT_OPTIONS: usize = 25;

pub const ANONYMOUS_NICKNAME: &str = "Anonymous";

/// UTC offsets from -12 to +14, cut to the select menu limit
pub fn timezones() -> Vec<String> {
    (-12..=14)
        .map(|offset: i32| match offset {
            0 => "UTC".to_string(),
            o if o > 0 => format!("UTC+{}", o),
            o => format!("UTC{}", o),
        })
        .take(MAX_SELECT_OPTIONS)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileStage {
    AwaitingGames,
    AwaitingTimezone,
    AwaitingPreferences,
    AwaitingNickname,
    Complete,
}

impl ProfileStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStage::AwaitingGames => "games",
            ProfileStage::AwaitingTimezone => "timezone",
            ProfileStage::AwaitingPreferences => "preferences",
            ProfileStage::AwaitingNickname => "nickname",
            ProfileStage::Complete => "complete",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "games" => Some(ProfileStage::AwaitingGames),
            "timezone" => Some(ProfileStage::AwaitingTimezone),
            "preferences" => Some(ProfileStage::AwaitingPreferences),
            "nickname" => Some(ProfileStage::AwaitingNickname),
            "complete" => Some(ProfileStage::Complete),
            _ => None,
        }
    }
}

/// One user action in the dialog
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileInput {
    Games(Vec<String>),
    Timezone(Vec<String>),
    Preferences(Vec<String>),
    Nickname(String),
}

/// Choices accumulated so far
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub games: Vec<String>,
    pub timezone: Option<String>,
    pub preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProfile {
    pub nickname: String,
    pub games: Vec<String>,
    pub timezone: String,
    pub preferences: Vec<String>,
}

impl SavedProfile {
    pub fn confirmation(&self) -> String {
        format!(
            "Profile saved!\nNickname: {}\nGames: {}\nTimezone: {}\nPreferences: {}",
            self.nickname,
            self.games.join(", "),
            self.timezone,
            self.preferences.join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFlow {
    stage: ProfileStage,
    draft: ProfileDraft,
    saved: Option<SavedProfile>,
}

impl Default for ProfileFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileFlow {
    pub fn new() -> Self {
        Self {
            stage: ProfileStage::AwaitingGames,
            draft: ProfileDraft::default(),
            saved: None,
        }
    }

    pub fn stage(&self) -> ProfileStage {
        self.stage
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// The finished profile, once the nickname has been submitted
    pub fn saved(&self) -> Option<&SavedProfile> {
        self.saved.as_ref()
    }

    /// Apply one input and return the next flow. `self` is left untouched on error.
    pub fn advance(&self, input: ProfileInput) -> Result<ProfileFlow, ProfileError> {
        let mut draft = self.draft.clone();
        match (self.stage, input) {
            (ProfileStage::Complete, _) => Err(ProfileError::AlreadyComplete),
            (ProfileStage::AwaitingGames, ProfileInput::Games(selected)) => {
                let games = validate_selection(selected, &GAMES)?;
                if games.is_empty() {
                    return Err(ProfileError::EmptySelection);
                }
                draft.games = games;
                Ok(self.next(ProfileStage::AwaitingTimezone, draft))
            }
            (ProfileStage::AwaitingTimezone, ProfileInput::Timezone(selected)) => {
                let zones = timezones();
                let allowed: Vec<&str> = zones.iter().map(String::as_str).collect();
                let mut chosen = validate_selection(selected, &allowed)?;
                if chosen.len() != 1 {
                    return Err(ProfileError::SingleSelection(chosen.len()));
                }
                draft.timezone = chosen.pop();
                Ok(self.next(ProfileStage::AwaitingPreferences, draft))
            }
            (ProfileStage::AwaitingPreferences, ProfileInput::Preferences(selected)) => {
                draft.preferences = validate_selection(selected, &PREFERENCES)?;
                Ok(self.next(ProfileStage::AwaitingNickname, draft))
            }
            (ProfileStage::AwaitingNickname, ProfileInput::Nickname(raw)) => {
                let nickname = match raw.trim() {
                    "" => ANONYMOUS_NICKNAME.to_string(),
                    name => name.to_string(),
                };
                let timezone = draft
                    .timezone
                    .clone()
                    .ok_or(ProfileError::UnexpectedInput)?;
                let saved = SavedProfile {
                    nickname,
                    games: draft.games.clone(),
                    timezone,
                    preferences: draft.preferences.clone(),
                };
                Ok(ProfileFlow {
                    stage: ProfileStage::Complete,
                    draft,
                    saved: Some(saved),
                })
            }
            _ => Err(ProfileError::UnexpectedInput),
        }
    }

    fn next(&self, stage: ProfileStage, draft: ProfileDraft) -> ProfileFlow {
        ProfileFlow {
            stage,
            draft,
            saved: None,
        }
    }
}

/// Keep the first occurrence of each option, rejecting anything not offered
fn validate_selection(selected: Vec<String>, allowed: &[&str]) -> Result<Vec<String>, ProfileError> {
    let mut kept: Vec<String> = Vec::with_capacity(selected.len());
    for value in selected {
        if !allowed.contains(&value.as_str()) {
            return Err(ProfileError::UnknownOption(value));
        }
        if !kept.contains(&value) {
            kept.push(value);
        }
    }
    Ok(kept)
}
