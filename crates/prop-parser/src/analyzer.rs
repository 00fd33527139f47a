//! Default [`PropAnalyzer`]: parses each line (or CSV row) and records the props in a [`PropLedger`].

use propbot_core::{AnalysisResult, PropAnalyzer, PropLedger, Result};
use tracing::{info, instrument, warn};

use crate::parser::PropParser;

/// Analyzer that parses props and records them for the report.
#[derive(Clone)]
pub struct ParsingAnalyzer {
    parser: PropParser,
    ledger: PropLedger,
}

impl ParsingAnalyzer {
    pub fn new(ledger: PropLedger) -> Self {
        Self {
            parser: PropParser::new(),
            ledger,
        }
    }

    pub fn ledger(&self) -> &PropLedger {
        &self.ledger
    }
}

impl PropAnalyzer for ParsingAnalyzer {
    #[instrument(skip(self, text))]
    fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let mut result = AnalysisResult::new(text);

        let format = self.parser.detect_format(text);
        for line in self.parser.rows(text, format) {
            match self.parser.parse_row(line, format) {
                Some(prop) if self.parser.validate(&prop) => result.props.push(prop),
                Some(_) | None => {
                    warn!(line = %line, "Could not parse prop");
                    result.rejected.push(line.to_string());
                }
            }
        }

        self.ledger.record(&result.props);
        info!(
            parsed = result.props.len(),
            rejected = result.rejected.len(),
            "Analysis complete"
        );
        Ok(result)
    }
}
