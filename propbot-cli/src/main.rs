//! propbot: analyze props interactively, one-shot (`--prop`), with sample data
//! (`--mode test`), as a Telegram bot (`--mode telegram`), or print the report (`--report`).

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use prop_parser::ParsingAnalyzer;
use propbot_cli::{finish, AppConfig, Dispatcher, InvocationRequest, Mode};
use propbot_core::{
    init_tracing, LedgerReportGenerator, LogTarget, PropAnalyzer, PropLedger, ReportGenerator,
};
use telegram_bot::TeloxideBotRunner;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    let request = match InvocationRequest::from_args(std::env::args_os()) {
        Ok(request) => request,
        Err(e) => return finish(Err(e.into())),
    };

    if let Err(e) = init_logging(&config, request.mode()) {
        eprintln!("Warning: {:#}", e);
    }

    let dispatcher = build_dispatcher(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    finish(dispatcher.execute(&request, stdin.lock(), &mut stdout))
}

/// The bot tees logs to stdout; every other mode keeps stdout for its own output.
fn init_logging(config: &AppConfig, mode: Mode) -> Result<()> {
    let target = match mode {
        Mode::Telegram => LogTarget::FileAndStdout,
        _ => LogTarget::FileOnly,
    };
    init_tracing(&config.log_file, target)
        .with_context(|| format!("logging to {} disabled", config.log_file))
}

fn build_dispatcher(config: AppConfig) -> Dispatcher {
    let ledger = PropLedger::new();
    let analyzer: Arc<dyn PropAnalyzer> = Arc::new(ParsingAnalyzer::new(ledger.clone()));
    let reports: Arc<dyn ReportGenerator> = Arc::new(LedgerReportGenerator::new(ledger));
    let bot_runner = TeloxideBotRunner::new(analyzer.clone(), reports.clone())
        .with_api_url(config.telegram_api_url.clone())
        .with_allowed_users(config.allowed_users.clone());
    Dispatcher::new(analyzer, reports, Arc::new(bot_runner), config)
}
