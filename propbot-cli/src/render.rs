//! Terminal rendering of analysis results, shared by the one-shot and interactive modes.

use std::io::Write;

use propbot_core::{AnalysisResult, CollaboratorError, Result};
use tracing::warn;

/// One line per parsed prop, then one line per rejected input line.
///
/// With `json` each prop is a JSON object on its own line and rejected lines go to the log
/// only, so the output stays machine-readable.
pub fn write_analysis<W: Write>(out: &mut W, result: &AnalysisResult, json: bool) -> Result<()> {
    for prop in &result.props {
        if json {
            let line = serde_json::to_string(prop)
                .map_err(|e| CollaboratorError::Analysis(format!("serialize prop: {}", e)))?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", prop)?;
        }
    }
    for line in &result.rejected {
        if json {
            warn!(line = %line, "Could not parse prop");
        } else {
            writeln!(out, "Could not parse: {}", line)?;
        }
    }
    Ok(())
}
