//! Reply texts sent by the bot. Plain text, no parse mode, so user input needs no escaping.

use propbot_core::{AnalysisResult, Report, Sport};

pub const PROP_EXAMPLE: &str = "Mike Trout Over 1.5 Hits +120";

pub fn welcome(name: &str) -> String {
    format!(
        "Welcome to Multi-Sport Prop Bot, {}!\n\n\
         Send me a prop like \"{}\" and I'll break it down.\n\
         Commands: /help /sports /props",
        name, PROP_EXAMPLE
    )
}

pub fn help() -> String {
    format!(
        "Multi-Sport Prop Bot\n\n\
         /props - today's analyzed props\n\
         /sports - supported sports\n\
         /help - this message\n\n\
         How to use:\n\
         1. Send prop text like \"{}\"\n\
         2. Send several props at once, one per line\n\
         3. Include odds when you have them\n\n\
         Format: Player Over/Under X.X Stat +/-XXX",
        PROP_EXAMPLE
    )
}

pub fn sports() -> String {
    let mut text = String::from("Supported sports:\n");
    for sport in Sport::ALL {
        text.push_str(&format!("\n{} - {}", sport.code(), sport.display_name()));
    }
    text
}

pub fn report(report: &Report) -> String {
    report.to_string()
}

pub fn unknown_command(command: &str) -> String {
    format!("Unknown command {}. Try /help.", command)
}

/// Parsed props one per line, followed by any lines that could not be parsed.
pub fn analysis(result: &AnalysisResult) -> String {
    if result.is_empty() {
        return format!(
            "I couldn't parse that prop format.\n\nTry something like: \"{}\"",
            PROP_EXAMPLE
        );
    }

    let mut text = format!("Parsed {} prop(s):", result.props.len());
    for prop in &result.props {
        text.push_str(&format!("\n\n{} ({})\n", prop.player_name, prop.sport));
        if let Some(direction) = prop.direction {
            text.push_str(&format!("{} ", direction));
        }
        text.push_str(&format!("{} {}", prop.line_value, prop.prop_type));
        match (&prop.odds, &prop.odds_under) {
            (Some(over), Some(under)) => text.push_str(&format!(" at {} over / {} under", over, under)),
            (Some(odds), None) | (None, Some(odds)) => text.push_str(&format!(" at {}", odds)),
            (None, None) => {}
        }
        if let Some(opponent) = &prop.opponent {
            text.push_str(&format!(" vs {}", opponent));
        }
    }
    if !result.rejected.is_empty() {
        text.push_str("\n\nCould not parse:");
        for line in &result.rejected {
            text.push_str(&format!("\n- {}", line));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sports_lists_every_code() {
        let text = sports();
        for sport in Sport::ALL {
            assert!(text.contains(sport.code()));
        }
    }

    #[test]
    fn test_empty_analysis_hints_format() {
        let text = analysis(&AnalysisResult::new("nonsense"));
        assert!(text.contains("couldn't parse"));
        assert!(text.contains(PROP_EXAMPLE));
    }

    #[test]
    fn test_csv_prop_shows_both_odds_without_side() {
        let mut result = AnalysisResult::new("csv");
        result.props = prop_parser::PropParser::new()
            .batch_parse("Mike Trout,MLB,Hits,1.5,+120,-150,SEA", None);
        let text = analysis(&result);
        assert!(text.contains("\n1.5 hits at +120 over / -150 under vs SEA"));
        assert!(!text.contains("over 1.5"));
    }
}
