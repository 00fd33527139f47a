//! Parsed invocation: which mode to run and, for prop mode, the text to analyze.

use std::ffi::OsString;
use std::fmt;

use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::cli::{Cli, ModeArg};
use crate::error::ArgumentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Prop,
    Telegram,
    Test,
    Report,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Interactive => "interactive",
            Mode::Prop => "prop",
            Mode::Telegram => "telegram",
            Mode::Test => "test",
            Mode::Report => "report",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated invocation. Prop text is present exactly when the mode is [`Mode::Prop`];
/// the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    mode: Mode,
    prop_text: Option<String>,
    json: bool,
}

impl InvocationRequest {
    pub fn interactive() -> Self {
        Self::with_mode(Mode::Interactive)
    }

    pub fn telegram() -> Self {
        Self::with_mode(Mode::Telegram)
    }

    pub fn test() -> Self {
        Self::with_mode(Mode::Test)
    }

    pub fn report() -> Self {
        Self::with_mode(Mode::Report)
    }

    /// Prop mode. The text is kept exactly as given.
    pub fn prop(text: impl Into<String>, json: bool) -> Self {
        Self {
            mode: Mode::Prop,
            prop_text: Some(text.into()),
            json,
        }
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            prop_text: None,
            json: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prop_text(&self) -> Option<&str> {
        self.prop_text.as_deref()
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Parses a full argument list (program name first).
    pub fn from_args<I, T>(args: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        Self::try_from(cli)
    }
}

impl TryFrom<Cli> for InvocationRequest {
    type Error = ArgumentError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if let Some(text) = cli.prop {
            if text.trim().is_empty() {
                return Err(Cli::command()
                    .error(
                        ErrorKind::InvalidValue,
                        "a value is required for '--prop <TEXT>' but none was supplied",
                    )
                    .into());
            }
            return Ok(Self::prop(text, cli.json));
        }
        if cli.report {
            return Ok(Self::report());
        }
        Ok(match cli.mode {
            None | Some(ModeArg::Interactive) => Self::interactive(),
            Some(ModeArg::Telegram) => Self::telegram(),
            Some(ModeArg::Test) => Self::test(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<InvocationRequest, ArgumentError> {
        InvocationRequest::from_args(std::iter::once("propbot").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_flags_is_interactive() {
        assert_eq!(parse(&[]).unwrap(), InvocationRequest::interactive());
        assert_eq!(
            parse(&["--mode", "interactive"]).unwrap(),
            InvocationRequest::interactive()
        );
    }

    #[test]
    fn test_prop_text_is_kept_verbatim() {
        let request = parse(&["--prop", "  Mike Trout Over 1.5 Hits  "]).unwrap();
        assert_eq!(request.mode(), Mode::Prop);
        assert_eq!(request.prop_text(), Some("  Mike Trout Over 1.5 Hits  "));
        assert!(!request.json());
    }

    #[test]
    fn test_mode_values() {
        assert_eq!(parse(&["--mode", "telegram"]).unwrap().mode(), Mode::Telegram);
        assert_eq!(parse(&["--mode", "test"]).unwrap().mode(), Mode::Test);
        assert_eq!(parse(&["--report"]).unwrap().mode(), Mode::Report);
        assert_eq!(parse(&["--report"]).unwrap().prop_text(), None);
    }

    #[test]
    fn test_grammar_violations() {
        assert_eq!(
            parse(&["--mode", "bogus"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse(&["--prop"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse(&["--prop", "   "]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse(&["--verbose"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["--report", "--mode", "test"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
        assert_eq!(
            parse(&["--json"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_help_is_informational() {
        let err = parse(&["--help"]).unwrap_err();
        assert!(err.is_informational());
        assert_eq!(err.exit_code(), 0);
        assert_eq!(parse(&["--mode", "bogus"]).unwrap_err().exit_code(), 2);
    }
}
