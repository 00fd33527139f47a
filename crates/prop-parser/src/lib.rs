//! # prop-parser
//!
//! Turns free-text props such as `Mike Trout Over 1.5 Hits +120` into [`propbot_core::Prop`]s.
//! [`PropParser`] does the line-level parsing and also reads CSV batches; [`ParsingAnalyzer`] is the default
//! [`propbot_core::PropAnalyzer`] built on it.

mod analyzer;
mod normalize;
mod parser;
mod sport;

pub use analyzer::ParsingAnalyzer;
pub use normalize::normalize_prop_type;
pub use parser::{InputFormat, PropParser};
pub use sport::detect_sport;
