//! Error types for each layer of the bot

use thiserror::Error;

/// Startup configuration errors. Any of these aborts the process.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Price fetch failures. All of them surface to the user as "no data".
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("invalid coin symbol {0:?}")]
    InvalidSymbol(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("price window is empty")]
    EmptyWindow,

    #[error("insufficient history: {available} of {required} days")]
    InsufficientHistory { required: usize, available: usize },

    #[error("invalid window weights: {0}")]
    InvalidWeights(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("select at least one option")]
    EmptySelection,

    #[error("unknown option {0:?}")]
    UnknownOption(String),

    #[error("expected exactly one selection, got {0}")]
    SingleSelection(usize),

    #[error("input does not match the current step")]
    UnexpectedInput,

    #[error("profile dialog is already complete")]
    AlreadyComplete,

    #[error("profile dialog expired or does not exist")]
    Expired,

    #[error("this profile dialog belongs to another user")]
    NotOwner,
}

#[derive(Error, Debug)]
pub enum DiscordError {
    #[error("discord request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("discord returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid discord url: {0}")]
    Url(#[from] url::ParseError),
}

/// Request signature failures on the interactions endpoint.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignatureError {
    #[error("missing signature headers")]
    MissingHeaders,

    #[error("malformed signature or key: {0}")]
    Malformed(String),

    #[error("signature does not match")]
    Mismatch,
}

/// Why a price report could not be produced
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}
