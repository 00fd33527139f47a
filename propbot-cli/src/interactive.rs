//! Interactive mode: a line-oriented loop over injected input and output streams.

use std::io::{BufRead, Write};

use propbot_core::{PropAnalyzer, ReportGenerator, Result};
use tracing::{info, warn};

use crate::render::write_analysis;

pub const BANNER: &str = "Multi-Sport Prop Bot (interactive)\n\
                          Type 'help' for commands, 'quit' to exit.";
pub const PROMPT: &str = "prop> ";
pub const HELP_TEXT: &str = "Commands:\n  \
                             help          show this message\n  \
                             report        show today's report\n  \
                             quit | exit   leave\n\
                             Anything else is analyzed as prop text, e.g. \
                             Mike Trout Over 1.5 Hits +120";
pub const GOODBYE: &str = "Goodbye!";

/// What one input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand<'a> {
    Help,
    Report,
    Quit,
    Analyze(&'a str),
    Empty,
}

impl<'a> LineCommand<'a> {
    /// Commands match case-insensitively after trimming; anything else is prop text.
    pub fn parse(line: &'a str) -> Self {
        let text = line.trim();
        if text.is_empty() {
            return LineCommand::Empty;
        }
        match text.to_lowercase().as_str() {
            "help" => LineCommand::Help,
            "report" => LineCommand::Report,
            "quit" | "exit" => LineCommand::Quit,
            _ => LineCommand::Analyze(text),
        }
    }
}

/// Runs until `quit`/`exit` or end of input.
///
/// Analyzer and report failures are printed and the loop goes on; only stream errors end it
/// early.
pub fn run_interactive<R, W>(
    mut input: R,
    output: &mut W,
    analyzer: &dyn PropAnalyzer,
    reports: &dyn ReportGenerator,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", BANNER)?;
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("End of input");
            writeln!(output)?;
            break;
        }

        match LineCommand::parse(&line) {
            LineCommand::Empty => continue,
            LineCommand::Help => writeln!(output, "{}", HELP_TEXT)?,
            LineCommand::Report => match reports.generate() {
                Ok(report) => writeln!(output, "{}", report)?,
                Err(e) => {
                    warn!(error = %e, "Report failed");
                    writeln!(output, "Error: {}", e)?;
                }
            },
            LineCommand::Quit => {
                writeln!(output, "{}", GOODBYE)?;
                break;
            }
            LineCommand::Analyze(text) => match analyzer.analyze(text) {
                Ok(result) => write_analysis(output, &result, false)?,
                Err(e) => {
                    warn!(error = %e, "Analysis failed");
                    writeln!(output, "Error: {}", e)?;
                }
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_commands() {
        assert_eq!(LineCommand::parse("  HeLp \n"), LineCommand::Help);
        assert_eq!(LineCommand::parse("REPORT"), LineCommand::Report);
        assert_eq!(LineCommand::parse("Exit"), LineCommand::Quit);
        assert_eq!(LineCommand::parse("quit\r\n"), LineCommand::Quit);
        assert_eq!(LineCommand::parse("   \n"), LineCommand::Empty);
        assert_eq!(LineCommand::parse("q"), LineCommand::Analyze("q"));
        assert_eq!(
            LineCommand::parse(" Mike Trout Over 1.5 Hits \n"),
            LineCommand::Analyze("Mike Trout Over 1.5 Hits")
        );
    }
}
