//! Supported sports and esports titles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sport a prop belongs to. Declaration order is the detection priority used by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sport {
    Mlb,
    Nfl,
    Nba,
    Nhl,
    Mma,
    Boxing,
    Golf,
    Cod,
    Cs2,
    Lol,
    Val,
    R6,
    Dota2,
    Rl,
}

impl Sport {
    /// All sports in detection priority order.
    pub const ALL: [Sport; 14] = [
        Sport::Mlb,
        Sport::Nfl,
        Sport::Nba,
        Sport::Nhl,
        Sport::Mma,
        Sport::Boxing,
        Sport::Golf,
        Sport::Cod,
        Sport::Cs2,
        Sport::Lol,
        Sport::Val,
        Sport::R6,
        Sport::Dota2,
        Sport::Rl,
    ];

    /// Short code, e.g. `MLB`.
    pub fn code(&self) -> &'static str {
        match self {
            Sport::Mlb => "MLB",
            Sport::Nfl => "NFL",
            Sport::Nba => "NBA",
            Sport::Nhl => "NHL",
            Sport::Mma => "MMA",
            Sport::Boxing => "BOXING",
            Sport::Golf => "GOLF",
            Sport::Cod => "COD",
            Sport::Cs2 => "CS2",
            Sport::Lol => "LOL",
            Sport::Val => "VAL",
            Sport::R6 => "R6",
            Sport::Dota2 => "DOTA2",
            Sport::Rl => "RL",
        }
    }

    /// Human-readable name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Mlb => "Baseball",
            Sport::Nfl => "Football",
            Sport::Nba => "Basketball",
            Sport::Nhl => "Hockey",
            Sport::Mma => "Mixed Martial Arts",
            Sport::Boxing => "Boxing",
            Sport::Golf => "Golf",
            Sport::Cod => "Call of Duty",
            Sport::Cs2 => "Counter-Strike 2",
            Sport::Lol => "League of Legends",
            Sport::Val => "Valorant",
            Sport::R6 => "Rainbow Six",
            Sport::Dota2 => "Dota 2",
            Sport::Rl => "Rocket League",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Sport::ALL
            .into_iter()
            .find(|sport| sport.code() == upper)
            .ok_or_else(|| format!("unknown sport: {}", s))
    }
}
