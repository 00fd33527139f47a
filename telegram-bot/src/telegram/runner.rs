//! REPL runner: converts teloxide messages to core::Message and passes them to the HandlerChain.

use crate::chain::HandlerChain;
use crate::core::{BotError, Result, ToCoreMessage};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Polls updates with the given teloxide Bot until stopped (Ctrl-C).
///
/// The token is checked with `getMe` first; a rejected token or an unreachable API returns
/// [`BotError::Bot`] before polling starts. Each message is converted to core::Message and
/// handled on its own task so a slow reply never blocks polling.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let me = bot.get_me().await.map_err(|e| {
        error!(error = %e, "getMe failed");
        BotError::Bot(format!("Telegram rejected the bot: {}", e))
    })?;
    info!(username = ?me.user.username, "Connected to Telegram");

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                "Received message"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            respond(())
        }
    })
    .await;
    Ok(())
}
