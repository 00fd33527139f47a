//! Sport detection from the stat text.

use propbot_core::Sport;

/// Keywords that identify a sport when they appear anywhere in the lowercased stat text.
fn keywords(sport: Sport) -> &'static [&'static str] {
    match sport {
        Sport::Mlb => &[
            "baseball", "mlb", "runs", "hits", "strikeouts", "home runs", "rbis",
            "stolen bases", "innings", "inning", "era", "whip", "allowed", "walks", "saves",
            "holds",
        ],
        Sport::Nfl => &[
            "football", "nfl", "yards", "touchdowns", "passing", "rushing", "receiving",
            "receptions", "completions", "attempts", "interceptions", "fumbles", "sacks",
        ],
        Sport::Nba => &[
            "basketball", "nba", "points", "rebounds", "assists", "steals", "blocks",
            "three pointers", "field goals", "free throws", "turnovers", "minutes",
        ],
        Sport::Nhl => &[
            "hockey", "nhl", "goals", "assists", "saves", "shots", "penalty minutes", "hits",
            "faceoff", "plus minus", "time on ice",
        ],
        Sport::Mma => &[
            "mma", "ufc", "strikes", "takedowns", "submission", "knockdowns",
            "significant strikes",
        ],
        Sport::Boxing => &["boxing", "punches", "knockdowns", "rounds", "jabs", "power punches"],
        Sport::Golf => &[
            "golf", "birdies", "eagles", "pars", "bogeys", "driving distance", "fairways",
            "greens in regulation", "putts",
        ],
        Sport::Cod => &["cod", "call of duty", "map", "kills", "deaths", "assists", "kd ratio"],
        Sport::Cs2 => &["cs2", "counter-strike", "maps", "kills", "deaths", "assists", "adr"],
        Sport::Lol => &["lol", "league of legends", "assists", "kills", "deaths", "cs", "gold"],
        Sport::Val => &["val", "valorant", "kills", "deaths", "assists", "rounds"],
        Sport::R6 => &["r6", "rainbow six", "kills", "deaths", "assists"],
        Sport::Dota2 => &["dota2", "dota", "kills", "deaths", "assists", "last hits"],
        Sport::Rl => &["rl", "rocket league", "goals", "saves", "demos", "shots"],
    }
}

/// Broad hints checked after the keyword tables; first matching group wins.
const HINTS: [(Sport, &[&str]); 4] = [
    (Sport::Mlb, &["inning", "runs", "hits", "strikeouts", "era"]),
    (Sport::Nfl, &["yards", "touchdowns", "receptions", "completions"]),
    (Sport::Nba, &["points", "rebounds", "assists", "field goals"]),
    (Sport::Nhl, &["goals", "saves", "shots", "assists"]),
];

/// Detects the sport of a stat like `Passing Yards`.
///
/// Sports are tried in [`Sport::ALL`] order, so a keyword shared by several sports
/// (`assists`, `kills`) resolves to the earliest one. Falls back to MLB.
pub fn detect_sport(prop_type: &str) -> Sport {
    let prop_lower = prop_type.to_lowercase();

    if let Some(sport) = Sport::ALL
        .into_iter()
        .find(|sport| keywords(*sport).iter().any(|k| prop_lower.contains(k)))
    {
        return sport;
    }

    for (sport, hints) in HINTS {
        if sport == Sport::Nhl && prop_lower.contains("field goals") {
            continue;
        }
        if hints.iter().any(|h| prop_lower.contains(h)) {
            return sport;
        }
    }

    Sport::Mlb
}
