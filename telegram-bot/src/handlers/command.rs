//! Slash commands: `/start`, `/help`, `/sports`, `/props`.

use std::sync::Arc;

use async_trait::async_trait;
use propbot_core::ReportGenerator;
use tracing::{info, instrument};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::replies;

/// Answers bot commands. Plain text is left to the next handler.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    reports: Arc<dyn ReportGenerator>,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>, reports: Arc<dyn ReportGenerator>) -> Self {
        Self { bot, reports }
    }

    fn reply_for(&self, message: &Message) -> Result<String> {
        let command = command_name(&message.content);
        let text = match command.as_str() {
            "/start" => replies::welcome(&message.user.display_name()),
            "/help" => replies::help(),
            "/sports" => replies::sports(),
            "/props" => replies::report(&self.reports.generate()?),
            _ => replies::unknown_command(&command),
        };
        Ok(text)
    }
}

/// First word, lowercased, without any `@botname` suffix.
fn command_name(content: &str) -> String {
    let word = content.split_whitespace().next().unwrap_or_default();
    let word = word.split('@').next().unwrap_or(word);
    word.to_lowercase()
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command() {
            return Ok(HandlerResponse::Continue);
        }

        let text = self.reply_for(message)?;
        info!(user_id = message.user.id, command = %command_name(&message.content), "Command handled");
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
