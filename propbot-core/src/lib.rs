//! # propbot-core
//!
//! Core types and traits for the prop bot: [`Prop`], [`AnalysisResult`], [`Report`], the
//! collaborator traits ([`PropAnalyzer`], [`ReportGenerator`], [`TelegramBotRunner`]),
//! the in-process [`PropLedger`] and tracing initialization. Transport-agnostic; used by
//! prop-parser, telegram-bot and propbot-cli.

pub mod collaborators;
pub mod error;
pub mod ledger;
pub mod logger;
pub mod report;
pub mod types;

pub use collaborators::{PropAnalyzer, ReportGenerator, TelegramBotRunner};
pub use error::{CollaboratorError, Result};
pub use ledger::PropLedger;
pub use logger::{init_tracing, LogTarget};
pub use report::LedgerReportGenerator;
pub use types::{AnalysisResult, BetDirection, Prop, Report, Sport};
