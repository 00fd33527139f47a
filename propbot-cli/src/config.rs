//! Process configuration, read once from the environment at startup.

use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/propbot.log";

/// Settings resolved before any mode runs. Call `dotenvy::dotenv()` first so `.env` applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TELEGRAM_BOT_TOKEN; empty values count as unset.
    pub telegram_bot_token: Option<String>,
    /// TELEGRAM_API_URL
    pub telegram_api_url: Option<String>,
    /// TELEGRAM_ALLOWED_USERS, comma-separated user ids
    pub allowed_users: Vec<i64>,
    /// LOG_FILE
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            telegram_bot_token: None,
            telegram_api_url: None,
            allowed_users: Vec::new(),
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            telegram_bot_token: non_empty_var("TELEGRAM_BOT_TOKEN"),
            telegram_api_url: non_empty_var("TELEGRAM_API_URL"),
            allowed_users: non_empty_var("TELEGRAM_ALLOWED_USERS")
                .map(|s| parse_user_ids(&s))
                .unwrap_or_default(),
            log_file: non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.telegram_bot_token = Some(token.into());
        self
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Ids that do not parse are skipped.
fn parse_user_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}
