//! Plain-text messages are prop submissions.

use std::sync::Arc;

use async_trait::async_trait;
use propbot_core::PropAnalyzer;
use tracing::{info, instrument};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::replies;

/// Runs the analyzer over the message text and replies with what was parsed.
///
/// Unparseable text gets a format hint rather than an error.
pub struct PropHandler {
    bot: Arc<dyn Bot>,
    analyzer: Arc<dyn PropAnalyzer>,
}

impl PropHandler {
    pub fn new(bot: Arc<dyn Bot>, analyzer: Arc<dyn PropAnalyzer>) -> Self {
        Self { bot, analyzer }
    }
}

#[async_trait]
impl Handler for PropHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.trim().is_empty() || message.is_command() {
            return Ok(HandlerResponse::Ignore);
        }

        let result = self.analyzer.analyze(&message.content)?;
        info!(
            user_id = message.user.id,
            parsed = result.props.len(),
            rejected = result.rejected.len(),
            "Prop text analyzed"
        );

        let text = replies::analysis(&result);
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
