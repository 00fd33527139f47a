//! Core types: prop, sport, direction, analysis result and report.
//!
//! Types are split into one file per main type.

mod analysis;
mod prop;
mod report;
mod sport;

pub use analysis::AnalysisResult;
pub use prop::{BetDirection, Prop};
pub use report::Report;
pub use sport::Sport;
