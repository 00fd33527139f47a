//! Logging and allowlist handlers. Both only use the before/after hooks.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::core::{Handler, HandlerError, HandlerResponse, Message, Result};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            content = %message.content,
            reply_to = ?message.reply_to_message_id,
            sent_at = %message.created_at,
            lag_ms = message.delivery_lag_ms(Utc::now()),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = response.kind(),
            "Processed message"
        );
        Ok(())
    }
}

/// Fails the chain with [`HandlerError::Unauthorized`] for users outside the allowlist.
pub struct AuthHandler {
    allowed_users: Vec<i64>,
}

impl AuthHandler {
    pub fn new(allowed_users: Vec<i64>) -> Self {
        Self { allowed_users }
    }
}

#[async_trait]
impl Handler for AuthHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let user_id = message.user.id;
        if self.allowed_users.contains(&user_id) {
            debug!(user_id, "User authorized");
            Ok(true)
        } else {
            warn!(user_id, "Unauthorized access attempt");
            Err(HandlerError::Unauthorized.into())
        }
    }
}
