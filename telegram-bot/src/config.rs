//! Bot config: token plus optional API URL override and user allowlist.
//!
//! Built explicitly by the caller; nothing here reads the environment.

use crate::core::{BotError, Result};

/// Telegram bot config (connectivity and access only).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Bot API base URL; points the bot at a mock server in tests.
    pub telegram_api_url: Option<String>,
    /// Telegram user ids allowed to talk to the bot. Empty means everyone.
    pub allowed_users: Vec<i64>,
}

impl TelegramConfig {
    /// Builds config with the given token; other fields empty.
    pub fn with_token(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            telegram_api_url: None,
            allowed_users: Vec::new(),
        }
    }

    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        self.telegram_api_url = url;
        self
    }

    pub fn with_allowed_users(mut self, users: Vec<i64>) -> Self {
        self.allowed_users = users;
        self
    }

    /// Fails fast on an empty token or an API URL that does not parse.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(BotError::Config("bot token is empty".to_string()));
        }
        if let Some(url) = self.api_url()? {
            if url.cannot_be_a_base() {
                return Err(BotError::Config(format!(
                    "Telegram API URL cannot be a base URL: {}",
                    url
                )));
            }
        }
        Ok(())
    }

    /// Parsed API URL, if one is set.
    pub fn api_url(&self) -> Result<Option<reqwest::Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|s| {
                reqwest::Url::parse(s).map_err(|e| {
                    BotError::Config(format!("Telegram API URL is not a valid URL ({}): {}", e, s))
                })
            })
            .transpose()
    }
}
