//! Wires config, transport and handlers together and runs the bot.

use std::sync::Arc;

use propbot_core::{CollaboratorError, PropAnalyzer, ReportGenerator, TelegramBotRunner};
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::TelegramConfig;
use crate::core::{Bot, Result};
use crate::handlers::{AuthHandler, CommandHandler, LoggingHandler, PropHandler};
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Builds the chain: logging, allowlist (only when configured), commands, props.
pub fn build_handler_chain(
    config: &TelegramConfig,
    bot: Arc<dyn Bot>,
    analyzer: Arc<dyn PropAnalyzer>,
    reports: Arc<dyn ReportGenerator>,
) -> HandlerChain {
    let mut chain = HandlerChain::new().add_handler(Arc::new(LoggingHandler));
    if !config.allowed_users.is_empty() {
        chain = chain.add_handler(Arc::new(AuthHandler::new(config.allowed_users.clone())));
    }
    chain
        .add_handler(Arc::new(CommandHandler::new(bot.clone(), reports)))
        .add_handler(Arc::new(PropHandler::new(bot, analyzer)))
}

/// Builds the teloxide client for `config`, honoring the API URL override.
pub fn build_teloxide_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    config.validate()?;
    let bot = teloxide::Bot::new(&config.bot_token);
    Ok(match config.api_url()? {
        Some(url) => bot.set_api_url(url),
        None => bot,
    })
}

/// [`TelegramBotRunner`] backed by teloxide long polling.
///
/// `run` blocks the calling thread on its own tokio runtime until the bot stops.
pub struct TeloxideBotRunner {
    analyzer: Arc<dyn PropAnalyzer>,
    reports: Arc<dyn ReportGenerator>,
    api_url: Option<String>,
    allowed_users: Vec<i64>,
}

impl TeloxideBotRunner {
    pub fn new(analyzer: Arc<dyn PropAnalyzer>, reports: Arc<dyn ReportGenerator>) -> Self {
        Self {
            analyzer,
            reports,
            api_url: None,
            allowed_users: Vec::new(),
        }
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        self.api_url = api_url;
        self
    }

    pub fn with_allowed_users(mut self, allowed_users: Vec<i64>) -> Self {
        self.allowed_users = allowed_users;
        self
    }

    fn config(&self, token: &str) -> TelegramConfig {
        TelegramConfig::with_token(token)
            .with_api_url(self.api_url.clone())
            .with_allowed_users(self.allowed_users.clone())
    }
}

impl TelegramBotRunner for TeloxideBotRunner {
    #[instrument(skip(self, token))]
    fn run(&self, token: &str) -> propbot_core::Result<()> {
        let config = self.config(token);
        let bot = build_teloxide_bot(&config)?;
        let chain = build_handler_chain(
            &config,
            Arc::new(TelegramBotAdapter::new(bot.clone())),
            self.analyzer.clone(),
            self.reports.clone(),
        );

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(CollaboratorError::Io)?;

        info!(
            handlers = chain.len(),
            allowlist = !config.allowed_users.is_empty(),
            "Starting Telegram bot"
        );
        runtime.block_on(run_repl(bot, chain))?;
        info!("Telegram bot stopped");
        Ok(())
    }
}
