//! Line-level prop parsing: ordered regex patterns with a token-scanning fallback.

use chrono::Utc;
use lazy_regex::{lazy_regex, Lazy};
use propbot_core::{BetDirection, Prop, Sport};
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::normalize::normalize_prop_type;
use crate::sport::detect_sport;

/// `Mike Trout Over 1.5 Hits +120`
static RE_STANDARD: Lazy<Regex> = lazy_regex!(
    r"(?i)^(?P<player_name>[A-Za-z .'-]+)\s+(?P<bet_type>Over|Under|More|Less|O|U)\s+(?P<line_value>\d+(\.\d+)?)\s+(?P<prop_type>.+?)(?:\s+(?P<odds>[+-]\d+))?$"
);

/// `Luis Castillo + Jack Leiter Over 0.5 1st Inning Runs Allowed`
static RE_COMBO: Lazy<Regex> = lazy_regex!(
    r"(?i)^(?P<player_name>[A-Za-z .'+&-]+)\s+(?P<bet_type>Over|Under|More|Less|O|U)\s+(?P<line_value>\d+(\.\d+)?)\s+(?P<prop_type>.+?)$"
);

/// `Aaron Judge Total Bases More 1.5`
static RE_STAT_FIRST: Lazy<Regex> = lazy_regex!(
    r"(?i)^(?P<player_name>[A-Za-z .'+&-]+)\s+(?P<prop_type>(?:1st\s+)?(?:\w+\s+)*\w+)\s+(?P<bet_type>More|Less|Over|Under)\s+(?P<line_value>\d+(\.\d+)?)$"
);

/// `Over 1.5 Hits Mike Trout`
static RE_REVERSED: Lazy<Regex> = lazy_regex!(
    r"(?i)^(?P<bet_type>Over|Under|More|Less|O|U)\s+(?P<line_value>\d+(\.\d+)?)\s+(?P<prop_type>[A-Za-z0-9 _-]+?)\s+(?P<player_name>[A-Za-z .'+&-]+)$"
);

/// Shape of a batch of props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// One free-text prop per line.
    Standard,
    /// `player,sport,prop_type,line,odds_over,odds_under,opponent,game_date` rows.
    Csv,
}

/// Parses props from free text. Stateless; patterns are compiled once per process.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropParser;

impl PropParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses every non-blank line of `input`; lines that do not parse are skipped.
    pub fn parse_manual_input(&self, input: &str) -> Vec<Prop> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| self.parse_single_prop(line))
            .collect()
    }

    /// Parses one line, trying each pattern in order and then the fallback scanner.
    pub fn parse_single_prop(&self, line: &str) -> Option<Prop> {
        let line = line.trim();
        let patterns: [&Regex; 4] = [&RE_STANDARD, &RE_COMBO, &RE_STAT_FIRST, &RE_REVERSED];

        for (i, pattern) in patterns.iter().enumerate() {
            if let Some(caps) = pattern.captures(line) {
                debug!(pattern = i + 1, line = %line, "Matched prop pattern");
                if let Some(prop) = self.extract_prop_data(&caps, line) {
                    return Some(prop);
                }
            }
        }

        self.manual_parse_fallback(line)
    }

    /// Checks that a prop has a player, a stat and a positive line.
    pub fn validate(&self, prop: &Prop) -> bool {
        if prop.player_name.trim().is_empty() {
            warn!(raw_input = %prop.raw_input, "Missing player name");
            return false;
        }
        if prop.prop_type.is_empty() {
            warn!(raw_input = %prop.raw_input, "Missing prop type");
            return false;
        }
        if !(prop.line_value > 0.0) {
            warn!(line_value = prop.line_value, "Invalid line value");
            return false;
        }
        true
    }

    /// Guesses CSV when commas outnumber spaces.
    pub fn detect_format(&self, input: &str) -> InputFormat {
        let commas = input.matches(',').count();
        let spaces = input.matches(' ').count();
        if commas > 0 && commas > spaces {
            InputFormat::Csv
        } else {
            InputFormat::Standard
        }
    }

    /// Parses a batch in the given format, or the detected one when `format` is `None`.
    pub fn batch_parse(&self, input: &str, format: Option<InputFormat>) -> Vec<Prop> {
        let format = format.unwrap_or_else(|| self.detect_format(input));
        debug!(?format, "Batch parsing props");
        match format {
            InputFormat::Standard => self.parse_manual_input(input),
            InputFormat::Csv => self.parse_csv_format(input),
        }
    }

    /// Parses CSV rows, skipping a header row and rows that do not parse.
    pub fn parse_csv_format(&self, input: &str) -> Vec<Prop> {
        csv_rows(input)
            .into_iter()
            .filter_map(|row| self.parse_csv_row(row))
            .collect()
    }

    /// Parses one CSV row. The first four columns are required.
    ///
    /// Rows carry no side, so the resulting prop has no direction. An unknown
    /// sport column falls back to detecting the sport from the stat.
    pub fn parse_csv_row(&self, row: &str) -> Option<Prop> {
        let parts: Vec<&str> = row.split(',').map(str::trim).collect();
        if parts.len() < 4 {
            debug!(row = %row, "CSV row has too few columns");
            return None;
        }

        let Ok(line_value) = parts[3].parse::<f64>() else {
            warn!(row = %row, value = parts[3], "Invalid CSV line value");
            return None;
        };
        let column = |i: usize| {
            parts
                .get(i)
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
        };
        let sport = parts[1]
            .parse::<Sport>()
            .unwrap_or_else(|_| detect_sport(parts[2]));

        let prop = Prop {
            player_name: parts[0].to_string(),
            sport,
            prop_type: normalize_prop_type(parts[2]),
            original_prop_type: parts[2].to_string(),
            line_value,
            direction: None,
            odds: column(4),
            odds_under: column(5),
            opponent: column(6),
            game_date: column(7),
            raw_input: row.trim().to_string(),
            parsed_at: Utc::now(),
        };
        debug!(prop = %prop, "Parsed CSV prop");
        Some(prop)
    }

    /// Splits `input` into the rows `parse_row` expects for `format`.
    pub(crate) fn rows<'a>(&self, input: &'a str, format: InputFormat) -> Vec<&'a str> {
        match format {
            InputFormat::Standard => input
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect(),
            InputFormat::Csv => csv_rows(input),
        }
    }

    pub(crate) fn parse_row(&self, row: &str, format: InputFormat) -> Option<Prop> {
        match format {
            InputFormat::Standard => self.parse_single_prop(row),
            InputFormat::Csv => self.parse_csv_row(row),
        }
    }

    fn extract_prop_data(&self, caps: &Captures<'_>, line: &str) -> Option<Prop> {
        let player_name = caps.name("player_name")?.as_str().trim();
        let direction = BetDirection::from_word(caps.name("bet_type")?.as_str())?;
        let line_value: f64 = caps.name("line_value")?.as_str().parse().ok()?;
        let prop_type = caps.name("prop_type")?.as_str().trim();
        let odds = caps.name("odds").map(|m| m.as_str().to_string());

        Some(build_prop(player_name, direction, line_value, prop_type, odds, line))
    }

    /// Scans tokens for the first direction word and the first number after it.
    ///
    /// Everything before the direction is the player, everything after the number the stat.
    fn manual_parse_fallback(&self, line: &str) -> Option<Prop> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        let Some((direction_idx, direction)) = parts
            .iter()
            .enumerate()
            .find_map(|(i, part)| BetDirection::from_word(part).map(|d| (i, d)))
        else {
            debug!(line = %line, "No direction (Over/Under) found");
            return None;
        };

        let Some((value_idx, line_value)) = parts
            .iter()
            .enumerate()
            .skip(direction_idx + 1)
            .find_map(|(i, part)| {
                part.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(|v| (i, v))
            })
        else {
            debug!(line = %line, "No line value found");
            return None;
        };

        let player_name = parts[..direction_idx].join(" ");
        if player_name.is_empty() {
            debug!(line = %line, "No player name found");
            return None;
        }

        let prop_type = if value_idx + 1 < parts.len() {
            parts[value_idx + 1..].join(" ")
        } else {
            "unknown".to_string()
        };

        Some(build_prop(&player_name, direction, line_value, &prop_type, None, line))
    }
}

fn csv_rows(input: &str) -> Vec<&str> {
    let mut lines = input.trim().lines().map(str::trim).peekable();
    if let Some(first) = lines.peek() {
        let first = first.to_lowercase();
        if ["player", "sport", "prop"].iter().any(|word| first.contains(word)) {
            lines.next();
        }
    }
    lines.filter(|line| !line.is_empty()).collect()
}

fn build_prop(
    player_name: &str,
    direction: BetDirection,
    line_value: f64,
    prop_type: &str,
    odds: Option<String>,
    raw_input: &str,
) -> Prop {
    let sport = detect_sport(prop_type);
    let prop = Prop {
        player_name: player_name.to_string(),
        sport,
        prop_type: normalize_prop_type(prop_type),
        original_prop_type: prop_type.to_string(),
        line_value,
        direction: Some(direction),
        odds,
        odds_under: None,
        opponent: None,
        game_date: None,
        raw_input: raw_input.to_string(),
        parsed_at: Utc::now(),
    };
    debug!(prop = %prop, "Parsed prop");
    prop
}
