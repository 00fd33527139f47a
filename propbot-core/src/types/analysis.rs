//! Outcome of analyzing one free-text submission.

use serde::{Deserialize, Serialize};

use super::prop::Prop;

/// Props parsed from one submission plus the non-empty lines that could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub input: String,
    pub props: Vec<Prop>,
    pub rejected: Vec<String>,
}

impl AnalysisResult {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// True when nothing in the input parsed.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}
