//! Stat normalization: maps free-text stat names to snake_case keys.

/// Known stat spellings and abbreviations, in lookup order for substring matching.
const NORMALIZATIONS: &[(&str, &str)] = &[
    // MLB
    ("hits", "hits"),
    ("runs", "runs"),
    ("runs allowed", "runs_allowed"),
    ("1st inning runs allowed", "runs_allowed_1st_inning"),
    ("first inning runs allowed", "runs_allowed_1st_inning"),
    ("1st inning runs", "runs_1st_inning"),
    ("rbis", "rbis"),
    ("rbi", "rbis"),
    ("home runs", "home_runs"),
    ("home run", "home_runs"),
    ("hr", "home_runs"),
    ("strikeouts", "strikeouts"),
    ("k", "strikeouts"),
    ("ks", "strikeouts"),
    ("stolen bases", "stolen_bases"),
    ("sb", "stolen_bases"),
    ("walks", "walks"),
    ("bb", "walks"),
    ("total bases", "total_bases"),
    ("tb", "total_bases"),
    ("era", "era"),
    ("earned run average", "era"),
    ("whip", "whip"),
    ("innings pitched", "innings_pitched"),
    ("ip", "innings_pitched"),
    // NFL
    ("passing yards", "passing_yards"),
    ("rushing yards", "rushing_yards"),
    ("receiving yards", "receiving_yards"),
    ("receptions", "receptions"),
    ("rec", "receptions"),
    ("touchdowns", "touchdowns"),
    ("touchdown", "touchdowns"),
    // Shared with MMA; the MMA meaning wins.
    ("td", "takedowns"),
    ("passing touchdowns", "passing_touchdowns"),
    ("rushing touchdowns", "rushing_touchdowns"),
    ("receiving touchdowns", "receiving_touchdowns"),
    ("completions", "completions"),
    ("comp", "completions"),
    ("attempts", "attempts"),
    ("att", "attempts"),
    ("interceptions", "interceptions"),
    ("int", "interceptions"),
    // NBA
    ("points", "points"),
    ("pts", "points"),
    ("rebounds", "rebounds"),
    ("reb", "rebounds"),
    ("assists", "assists"),
    ("ast", "assists"),
    ("steals", "steals"),
    ("stl", "steals"),
    ("blocks", "blocks"),
    ("blk", "blocks"),
    ("three pointers", "three_pointers"),
    ("threes", "three_pointers"),
    ("3pm", "three_pointers"),
    ("field goals", "field_goals"),
    ("fg", "field_goals"),
    ("free throws", "free_throws"),
    ("ft", "free_throws"),
    ("turnovers", "turnovers"),
    ("to", "turnovers"),
    ("double double", "double_double"),
    ("triple double", "triple_double"),
    // NHL
    ("goals", "goals"),
    ("shots", "shots"),
    ("sog", "shots"),
    ("saves", "saves"),
    ("sv", "saves"),
    ("penalty minutes", "penalty_minutes"),
    ("pim", "penalty_minutes"),
    ("blocked shots", "blocked_shots"),
    ("faceoff wins", "faceoff_wins"),
    ("fow", "faceoff_wins"),
    // MMA / boxing
    ("strikes landed", "strikes_landed"),
    ("significant strikes", "significant_strikes"),
    ("takedowns", "takedowns"),
    ("submission attempts", "submission_attempts"),
    ("knockdowns", "knockdowns"),
    ("punches landed", "punches_landed"),
    ("rounds won", "rounds_won"),
    // Golf
    ("birdies", "birdies"),
    ("eagles", "eagles"),
    ("pars", "pars"),
    ("bogeys", "bogeys"),
    ("driving distance", "driving_distance"),
    ("fairways hit", "fairways_hit"),
    ("greens in regulation", "greens_in_regulation"),
    ("gir", "greens_in_regulation"),
    ("putts", "putts"),
    // Esports
    ("kills", "kills"),
    ("deaths", "deaths"),
    ("maps won", "maps_won"),
    ("damage", "damage"),
    ("adr", "adr"),
    ("kd ratio", "kd_ratio"),
    ("kda", "kda"),
];

/// Normalizes a stat such as `Passing Yards` to `passing_yards`.
///
/// Exact table match first, then the first table entry contained in the stat; otherwise the
/// stat itself in snake_case (`+` becomes `_plus_`, apostrophes are dropped).
pub fn normalize_prop_type(prop_type: &str) -> String {
    let prop_lower = prop_type.trim().to_lowercase();

    if let Some((_, key)) = NORMALIZATIONS.iter().find(|(name, _)| *name == prop_lower) {
        return (*key).to_string();
    }

    if let Some((_, key)) = NORMALIZATIONS
        .iter()
        .find(|(name, _)| prop_lower.contains(name))
    {
        return (*key).to_string();
    }

    snake_case(&prop_lower)
}

fn snake_case(text: &str) -> String {
    let mut normalized = text
        .replace([' ', '-'], "_")
        .replace('\'', "")
        .replace('+', "_plus_");
    while normalized.contains("__") {
        normalized = normalized.replace("__", "_");
    }
    normalized.trim_matches('_').to_string()
}
