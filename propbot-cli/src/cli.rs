//! Command-line grammar.

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "propbot")]
#[command(about = "Multi-sport prop bot: analyze props interactively, one-shot, or over Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Analyze one prop, e.g. "Mike Trout Over 1.5 Hits +120"
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["mode", "report"])]
    pub prop: Option<String>,

    /// Run mode (no flags starts interactive mode)
    #[arg(long, value_enum, value_name = "MODE", conflicts_with = "report")]
    pub mode: Option<ModeArg>,

    /// Print the daily report. Covers only props analyzed by this process; nothing is
    /// persisted between runs
    #[arg(long)]
    pub report: bool,

    /// Print parsed props as JSON lines (with --prop)
    #[arg(long, requires = "prop")]
    pub json: bool,
}

/// Values accepted by `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Interactive,
    Telegram,
    Test,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_report_help_names_its_scope() {
        let rendered = Cli::command().render_help().to_string();
        let help = rendered.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(help.contains("--report"));
        assert!(help.contains("Covers only props analyzed by this process"));
    }
}
