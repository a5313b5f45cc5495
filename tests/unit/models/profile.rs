//! Unit tests for the profile dialog state machine

use coinsignal::error::ProfileError;
use coinsignal::models::profile::{timezones, ANONYMOUS_NICKNAME};
use coinsignal::models::{ProfileFlow, ProfileInput, ProfileStage};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn at_preferences() -> ProfileFlow {
    ProfileFlow::new()
        .advance(ProfileInput::Games(strings(&["Valorant", "Roblox"])))
        .unwrap()
        .advance(ProfileInput::Timezone(strings(&["UTC+2"])))
        .unwrap()
}

#[test]
fn test_full_dialog_saves_profile() {
    let flow = at_preferences()
        .advance(ProfileInput::Preferences(strings(&["No Microphone"])))
        .unwrap();
    assert_eq!(flow.stage(), ProfileStage::AwaitingNickname);
    assert!(flow.saved().is_none());

    let done = flow
        .advance(ProfileInput::Nickname("  rusty  ".to_string()))
        .unwrap();
    assert_eq!(done.stage(), ProfileStage::Complete);
    let saved = done.saved().unwrap();
    assert_eq!(saved.nickname, "rusty");
    assert_eq!(saved.games, strings(&["Valorant", "Roblox"]));
    assert_eq!(saved.timezone, "UTC+2");
    assert_eq!(saved.preferences, strings(&["No Microphone"]));
    assert_eq!(
        saved.confirmation(),
        "Profile saved!\nNickname: rusty\nGames: Valorant, Roblox\nTimezone: UTC+2\nPreferences: No Microphone"
    );
}

#[test]
fn test_empty_game_selection_rejected() {
    let flow = ProfileFlow::new();
    assert_eq!(
        flow.advance(ProfileInput::Games(Vec::new())),
        Err(ProfileError::EmptySelection)
    );
    assert_eq!(flow.stage(), ProfileStage::AwaitingGames);
}

#[test]
fn test_unknown_game_rejected() {
    assert_eq!(
        ProfileFlow::new().advance(ProfileInput::Games(strings(&["Tetris"]))),
        Err(ProfileError::UnknownOption("Tetris".to_string()))
    );
}

#[test]
fn test_timezone_requires_single_choice() {
    let flow = ProfileFlow::new()
        .advance(ProfileInput::Games(strings(&["Fortnite"])))
        .unwrap();
    assert_eq!(
        flow.advance(ProfileInput::Timezone(Vec::new())),
        Err(ProfileError::SingleSelection(0))
    );
    assert_eq!(
        flow.advance(ProfileInput::Timezone(strings(&["UTC", "UTC+1"]))),
        Err(ProfileError::SingleSelection(2))
    );
    assert_eq!(
        flow.advance(ProfileInput::Timezone(strings(&["UTC+14"]))),
        Err(ProfileError::UnknownOption("UTC+14".to_string()))
    );
}

#[test]
fn test_steps_cannot_be_skipped() {
    let flow = ProfileFlow::new();
    assert_eq!(
        flow.advance(ProfileInput::Nickname("early".to_string())),
        Err(ProfileError::UnexpectedInput)
    );
    assert_eq!(
        flow.advance(ProfileInput::Timezone(strings(&["UTC"]))),
        Err(ProfileError::UnexpectedInput)
    );
}

#[test]
fn test_no_preferences_is_allowed() {
    let flow = at_preferences()
        .advance(ProfileInput::Preferences(Vec::new()))
        .unwrap();
    assert_eq!(flow.stage(), ProfileStage::AwaitingNickname);
    assert!(flow.draft().preferences.is_empty());
}

#[test]
fn test_blank_nickname_becomes_anonymous() {
    let done = at_preferences()
        .advance(ProfileInput::Preferences(Vec::new()))
        .and_then(|f| f.advance(ProfileInput::Nickname("   ".to_string())))
        .unwrap();
    assert_eq!(done.saved().unwrap().nickname, ANONYMOUS_NICKNAME);
}

#[test]
fn test_complete_flow_cannot_be_revisited() {
    let done = at_preferences()
        .advance(ProfileInput::Preferences(Vec::new()))
        .and_then(|f| f.advance(ProfileInput::Nickname("x".to_string())))
        .unwrap();
    assert_eq!(
        done.advance(ProfileInput::Games(strings(&["Roblox"]))),
        Err(ProfileError::AlreadyComplete)
    );
}

#[test]
fn test_timezone_labels_are_signed_offsets() {
    let zones = timezones();
    assert_eq!(zones.len(), 25);
    assert_eq!(zones.first().map(String::as_str), Some("UTC-12"));
    assert_eq!(zones[12], "UTC");
    assert_eq!(zones[13], "UTC+1");
    assert_eq!(zones.last().map(String::as_str), Some("UTC+12"));
}
