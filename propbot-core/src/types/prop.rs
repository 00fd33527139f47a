//! A single parsed prop and its bet direction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::sport::Sport;

/// Side of the line the prop takes. `More`/`O` normalize to `Over`, `Less`/`U` to `Under`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetDirection {
    Over,
    Under,
}

impl BetDirection {
    /// Parses a direction word (`over`, `under`, `more`, `less`, `o`, `u`), ignoring case.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "over" | "more" | "o" => Some(BetDirection::Over),
            "under" | "less" | "u" => Some(BetDirection::Under),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BetDirection::Over => "over",
            BetDirection::Under => "under",
        }
    }
}

impl fmt::Display for BetDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wager proposition parsed from free text or a CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub player_name: String,
    pub sport: Sport,
    /// Normalized snake_case stat key, e.g. `passing_yards`.
    pub prop_type: String,
    /// Stat text as it appeared in the input.
    pub original_prop_type: String,
    pub line_value: f64,
    /// Side taken. `None` for CSV rows, which quote the line without picking a side.
    pub direction: Option<BetDirection>,
    /// American odds kept verbatim (e.g. `-110`). For CSV rows, the over odds.
    pub odds: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odds_under: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_date: Option<String>,
    pub raw_input: String,
    pub parsed_at: DateTime<Utc>,
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.player_name)?;
        if let Some(direction) = self.direction {
            write!(f, "{} ", direction)?;
        }
        write!(f, "{} {} ({})", self.line_value, self.prop_type, self.sport)?;
        match (&self.odds, &self.odds_under) {
            (Some(over), Some(under)) => write!(f, " {}/{}", over, under)?,
            (Some(odds), None) | (None, Some(odds)) => write!(f, " {}", odds)?,
            (None, None) => {}
        }
        if let Some(opponent) = &self.opponent {
            write!(f, " vs {}", opponent)?;
        }
        Ok(())
    }
}
