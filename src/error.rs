//! Application-wide error type.
//! Handlers bubble everything up as `BotError`; the interaction router is the
//! single place that logs failures and reports them to the user.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("discord error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("state serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The token in a component custom id no longer resolves to stored state.
    #[error("this panel has expired, run the command again")]
    PanelExpired,

    /// A user pressed a control on somebody else's panel.
    #[error("this panel belongs to someone else")]
    NotYourPanel,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl BotError {
    /// Message shown to the interacting user. Expiry and ownership problems
    /// get their real text; everything else collapses to a generic line so
    /// internals never leak into chat.
    pub fn user_message(&self) -> String {
        match self {
            BotError::PanelExpired | BotError::NotYourPanel | BotError::InvalidInput(_) => {
                format!("❌ {self}")
            }
            _ => "❌ Something went wrong. Please try again later.".to_string(),
        }
    }
}
