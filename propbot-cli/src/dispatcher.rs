//! Mode dispatcher: routes one invocation to exactly one handler.

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use propbot_core::{CollaboratorError, PropAnalyzer, ReportGenerator, TelegramBotRunner};
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use crate::error::DispatchError;
use crate::interactive::run_interactive;
use crate::render::write_analysis;
use crate::request::{InvocationRequest, Mode};
use crate::samples::SAMPLE_PROPS;

/// Holds the collaborators and the startup config; the mode handlers live here.
pub struct Dispatcher {
    analyzer: Arc<dyn PropAnalyzer>,
    reports: Arc<dyn ReportGenerator>,
    bot_runner: Arc<dyn TelegramBotRunner>,
    config: AppConfig,
}

impl Dispatcher {
    pub fn new(
        analyzer: Arc<dyn PropAnalyzer>,
        reports: Arc<dyn ReportGenerator>,
        bot_runner: Arc<dyn TelegramBotRunner>,
        config: AppConfig,
    ) -> Self {
        Self {
            analyzer,
            reports,
            bot_runner,
            config,
        }
    }

    /// Parses `args` (program name first) and runs the selected mode.
    ///
    /// A grammar error returns before any handler runs.
    pub fn dispatch<I, T, R, W>(&self, args: I, input: R, output: &mut W) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        R: BufRead,
        W: Write,
    {
        let request = InvocationRequest::from_args(args)?;
        self.execute(&request, input, output)
    }

    #[instrument(skip_all, fields(mode = %request.mode()))]
    pub fn execute<R, W>(
        &self,
        request: &InvocationRequest,
        input: R,
        output: &mut W,
    ) -> Result<(), DispatchError>
    where
        R: BufRead,
        W: Write,
    {
        info!("Dispatching");
        let result = match (request.mode(), request.prop_text()) {
            (Mode::Interactive, _) => {
                run_interactive(input, output, self.analyzer.as_ref(), self.reports.as_ref())
            }
            (Mode::Prop, Some(text)) => self.run_prop(text, request.json(), output),
            (Mode::Prop, None) => Err(CollaboratorError::Analysis(
                "prop mode without prop text".to_string(),
            )),
            (Mode::Telegram, _) => self.run_telegram(),
            (Mode::Test, _) => self.run_test(output),
            (Mode::Report, _) => self.run_report(output),
        };
        output.flush()?;
        result.map_err(DispatchError::from)
    }

    fn run_prop<W: Write>(&self, text: &str, json: bool, output: &mut W) -> propbot_core::Result<()> {
        let result = self.analyzer.analyze(text)?;
        write_analysis(output, &result, json)?;
        if result.is_empty() {
            return Err(CollaboratorError::Analysis(format!(
                "could not parse any prop from: {}",
                text
            )));
        }
        Ok(())
    }

    fn run_report<W: Write>(&self, output: &mut W) -> propbot_core::Result<()> {
        let report = self.reports.generate()?;
        writeln!(output, "{}", report)?;
        Ok(())
    }

    fn run_test<W: Write>(&self, output: &mut W) -> propbot_core::Result<()> {
        writeln!(output, "Analyzing {} sample props", SAMPLE_PROPS.len())?;
        let mut failed = 0;
        for sample in SAMPLE_PROPS {
            writeln!(output, "\n> {}", sample)?;
            let result = self.analyzer.analyze(sample)?;
            write_analysis(output, &result, false)?;
            if result.is_empty() {
                failed += 1;
            }
        }

        writeln!(output)?;
        self.run_report(output)?;

        if failed > 0 {
            return Err(CollaboratorError::Analysis(format!(
                "{} of {} sample props could not be parsed",
                failed,
                SAMPLE_PROPS.len()
            )));
        }
        Ok(())
    }

    /// The token was resolved at startup; without it the runner is never entered.
    fn run_telegram(&self) -> propbot_core::Result<()> {
        let token = self.config.telegram_bot_token.as_deref().ok_or_else(|| {
            CollaboratorError::Config(
                "TELEGRAM_BOT_TOKEN is not set; add it to .env or the environment".to_string(),
            )
        })?;
        self.bot_runner.run(token)
    }
}

/// Prints a dispatch error where the user will see it: help/version and usage errors via
/// clap, everything else to stderr.
pub fn report_error(err: &DispatchError) {
    match err {
        DispatchError::Argument(e) => {
            if let Err(io_err) = e.print() {
                error!(error = %io_err, "Failed to print usage");
            }
        }
        DispatchError::Collaborator(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
        }
    }
}

/// Maps a dispatch outcome to the process exit status, reporting any error first.
pub fn finish(result: Result<(), DispatchError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
