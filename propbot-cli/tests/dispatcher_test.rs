//! End-to-end behavior of the mode dispatcher with recording collaborators.


use std::sync::Arc;

use fakes::{BrokenAnalyzer, CountingReports, Harness, RecordingRunner};
use propbot_cli::interactive::{GOODBYE, HELP_TEXT};
use propbot_cli::{AppConfig, DispatchError, Dispatcher};
use propbot_core::{CollaboratorError, PropLedger};

#[test]
fn test_no_args_help_then_quit() {
    let harness = Harness::new(AppConfig::default());

    let (result, output) = harness.run(&[], "help\nquit\n");

    assert!(result.is_ok());
    assert_eq!(output.matches(HELP_TEXT).count(), 1);
    assert!(output.contains(GOODBYE));
    assert!(harness.analyzer.calls().is_empty());
}

#[test]
fn test_help_is_case_insensitive_and_never_analyzed() {
    let harness = Harness::new(AppConfig::default());

    let (result, output) = harness.run(&[], "HELP\n  Help  \n");

    assert!(result.is_ok());
    assert_eq!(output.matches(HELP_TEXT).count(), 2);
    assert!(harness.analyzer.calls().is_empty());
}

#[test]
fn test_quit_stops_reading() {
    let harness = Harness::new(AppConfig::default());

    let (result, _) = harness.run(&[], "EXIT\nMike Trout Over 1.5 Hits +120\n");

    assert!(result.is_ok());
    assert!(harness.analyzer.calls().is_empty());
}

#[test]
fn test_interactive_analyzes_and_reports() {
    let harness = Harness::new(AppConfig::default());

    let (result, output) = harness.run(
        &[],
        "\nMike Trout Over 1.5 Hits +120\nq\nreport\nquit\n",
    );

    assert!(result.is_ok());
    assert_eq!(
        harness.analyzer.calls(),
        vec!["Mike Trout Over 1.5 Hits +120", "q"]
    );
    assert!(output.contains("Mike Trout over 1.5 hits (MLB) +120"));
    assert!(output.contains("Could not parse: q"));
    assert!(output.contains("Total Props Analyzed: 1"));
    assert_eq!(harness.reports.calls(), 1);
}

#[test]
fn test_interactive_ends_at_end_of_input() {
    let harness = Harness::new(AppConfig::default());
    let (result, output) = harness.run(&[], "");
    assert!(result.is_ok());
    assert!(!output.contains(GOODBYE));
}

#[test]
fn test_interactive_survives_analyzer_errors() {
    let ledger = PropLedger::new();
    let dispatcher = Dispatcher::new(
        Arc::new(BrokenAnalyzer),
        Arc::new(CountingReports::new(ledger)),
        Arc::new(RecordingRunner::default()),
        AppConfig::default(),
    );
    let mut output = Vec::new();

    let result = dispatcher.dispatch(["propbot"], &b"Mike Trout Over 1.5 Hits\nhelp\n"[..], &mut output);

    assert!(result.is_ok());
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Error: Analysis error: model offline"));
    assert!(output.contains(HELP_TEXT));
}

#[test]
fn test_prop_flag_forwards_text_once() {
    let harness = Harness::new(AppConfig::default());

    let (result, output) = harness.run(&["--prop", "LeBron James Under 25.5 Points -110"], "");

    assert!(result.is_ok());
    assert_eq!(
        harness.analyzer.calls(),
        vec!["LeBron James Under 25.5 Points -110"]
    );
    assert!(output.contains("LeBron James under 25.5 points (NBA) -110"));
    assert!(harness.runner.tokens().is_empty());
}

#[test]
fn test_prop_json_output() {
    let harness = Harness::new(AppConfig::default());

    let (result, output) = harness.run(
        &["--prop", "Connor McDavid Over 0.5 Goals +150", "--json"],
        "",
    );

    assert!(result.is_ok());
    let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(value["player_name"], "Connor McDavid");
    assert_eq!(value["sport"], "NHL");
}

#[test]
fn test_unparseable_prop_fails() {
    let harness = Harness::new(AppConfig::default());

    let (result, output) = harness.run(&["--prop", "no line here"], "");

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Collaborator(CollaboratorError::Analysis(_))
    ));
    assert_eq!(err.exit_code(), 1);
    assert!(output.contains("Could not parse: no line here"));
}

#[test]
fn test_unknown_mode_is_argument_error() {
    let harness = Harness::new(AppConfig::default().with_token("123:abc"));

    let (result, output) = harness.run(&["--mode", "bogus"], "help\n");

    let err = result.unwrap_err();
    assert!(matches!(err, DispatchError::Argument(_)));
    assert_ne!(err.exit_code(), 0);
    assert!(output.is_empty());
    assert!(harness.handlers_untouched());
}

#[test]
fn test_grammar_errors_invoke_nothing() {
    for args in [
        &["--prop"][..],
        &["--prop", "Mike Trout Over 1.5 Hits", "--report"][..],
        &["--mode"][..],
        &["--frobnicate"][..],
        &["--help"][..],
    ] {
        let harness = Harness::new(AppConfig::default());
        let (result, _) = harness.run(args, "");
        assert!(matches!(result, Err(DispatchError::Argument(_))), "{:?}", args);
        assert!(harness.handlers_untouched(), "{:?}", args);
    }
}

#[test]
fn test_telegram_without_token_never_runs_bot() {
    let harness = Harness::new(AppConfig::default());

    let (result, _) = harness.run(&["--mode", "telegram"], "");

    assert!(matches!(
        result,
        Err(DispatchError::Collaborator(CollaboratorError::Config(_)))
    ));
    assert!(harness.runner.tokens().is_empty());
}

#[test]
fn test_telegram_passes_resolved_token() {
    let harness = Harness::new(AppConfig::default().with_token("123:abc"));

    let (result, _) = harness.run(&["--mode", "telegram"], "");

    assert!(result.is_ok());
    assert_eq!(harness.runner.tokens(), vec!["123:abc"]);
    assert!(harness.analyzer.calls().is_empty());
}

#[test]
fn test_report_flag_prints_report() {
    let harness = Harness::new(AppConfig::default());

    let (result, output) = harness.run(&["--report"], "");

    assert!(result.is_ok());
    assert!(output.contains("No props analyzed today."));
    assert_eq!(harness.reports.calls(), 1);
}

#[test]
fn test_test_mode_runs_samples_then_report() {
    let harness = Harness::new(AppConfig::default());

    let (result, output) = harness.run(&["--mode", "test"], "");

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(harness.analyzer.calls().len(), 5);
    assert!(output.contains("Total Props Analyzed: 5"));
    assert!(output.contains("Luis Castillo + Jack Leiter over 0.5"));
}
