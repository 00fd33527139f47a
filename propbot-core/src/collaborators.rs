//! Collaborator interfaces the dispatcher delegates to.
//!
//! Implementations live in other crates: `prop-parser` provides the analyzer, `telegram-bot`
//! the bot runner. [`crate::LedgerReportGenerator`] is the default report generator.

use crate::error::Result;
use crate::types::{AnalysisResult, Report};

/// Turns free-text prop submissions into [`AnalysisResult`]s.
pub trait PropAnalyzer: Send + Sync {
    /// Analyzes `text` as given; callers must not pre-process it.
    fn analyze(&self, text: &str) -> Result<AnalysisResult>;
}

/// Produces the daily report.
pub trait ReportGenerator: Send + Sync {
    fn generate(&self) -> Result<Report>;
}

/// Runs the Telegram bot loop. Blocks until the bot is stopped.
pub trait TelegramBotRunner {
    fn run(&self, token: &str) -> Result<()>;
}
