//! [`telegram_bot::TeloxideBotRunner`] against a mock Bot API server.

use std::sync::Arc;

use mockito::Matcher;
use prop_parser::ParsingAnalyzer;
use propbot_core::{
    CollaboratorError, LedgerReportGenerator, PropLedger, TelegramBotRunner,
};
use telegram_bot::TeloxideBotRunner;

const UNAUTHORIZED: &str = r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#;

fn runner(api_url: Option<String>) -> TeloxideBotRunner {
    let ledger = PropLedger::new();
    TeloxideBotRunner::new(
        Arc::new(ParsingAnalyzer::new(ledger.clone())),
        Arc::new(LedgerReportGenerator::new(ledger)),
    )
    .with_api_url(api_url)
}

/// A token the API rejects ends `run` with an error instead of starting to poll.
#[test]
fn test_rejected_token_returns_bot_error() {
    let mut server = mockito::Server::new();
    // Hold the guards until run returns.
    let _post = server
        .mock("POST", Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(UNAUTHORIZED)
        .create();
    let _get = server
        .mock("GET", Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(UNAUTHORIZED)
        .create();

    let result = runner(Some(server.url())).run("123:bad");

    match result {
        Err(CollaboratorError::Bot(message)) => assert!(message.contains("rejected")),
        other => panic!("expected CollaboratorError::Bot, got {:?}", other),
    }
}

#[test]
fn test_invalid_api_url_is_config_error() {
    let result = runner(Some("not a url".to_string())).run("123:abc");
    assert!(matches!(result, Err(CollaboratorError::Config(_))));
}

#[test]
fn test_blank_token_is_config_error() {
    let result = runner(None).run("  ");
    assert!(matches!(result, Err(CollaboratorError::Config(_))));
}
