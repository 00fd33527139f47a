//! Default [`ReportGenerator`]: summarizes today's props from a [`PropLedger`].

use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::collaborators::ReportGenerator;
use crate::error::Result;
use crate::ledger::PropLedger;
use crate::types::{BetDirection, Report};

/// Number of props listed under "Recent".
const RECENT_LIMIT: usize = 5;

/// Builds reports from the props recorded in a ledger on the current local date.
#[derive(Clone)]
pub struct LedgerReportGenerator {
    ledger: PropLedger,
}

impl LedgerReportGenerator {
    pub fn new(ledger: PropLedger) -> Self {
        Self { ledger }
    }

    /// Report for `date`; only props parsed on that local date count.
    pub fn generate_for(&self, date: NaiveDate) -> Report {
        let props: Vec<_> = self
            .ledger
            .snapshot()
            .into_iter()
            .filter(|p| p.parsed_at.with_timezone(&Local).date_naive() == date)
            .collect();

        let mut by_sport = BTreeMap::new();
        let mut overs = 0;
        let mut unders = 0;
        for prop in &props {
            *by_sport.entry(prop.sport).or_insert(0) += 1;
            match prop.direction {
                Some(BetDirection::Over) => overs += 1,
                Some(BetDirection::Under) => unders += 1,
                None => {}
            }
        }

        Report {
            date,
            total_props: props.len(),
            by_sport,
            overs,
            unders,
            recent: props.iter().rev().take(RECENT_LIMIT).cloned().collect(),
        }
    }
}

impl ReportGenerator for LedgerReportGenerator {
    #[instrument(skip(self))]
    fn generate(&self) -> Result<Report> {
        let report = self.generate_for(Local::now().date_naive());
        debug!(total_props = report.total_props, "Report generated");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Prop, Sport};
    use chrono::Utc;

    fn prop(player: &str, sport: Sport, direction: Option<BetDirection>) -> Prop {
        Prop {
            player_name: player.to_string(),
            sport,
            prop_type: "points".to_string(),
            original_prop_type: "Points".to_string(),
            line_value: 10.5,
            direction,
            odds: None,
            odds_under: None,
            opponent: None,
            game_date: None,
            raw_input: player.to_string(),
            parsed_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_ledger_reports_no_props() {
        let generator = LedgerReportGenerator::new(PropLedger::new());
        let report = generator.generate().unwrap();
        assert_eq!(report.total_props, 0);
        assert!(report.to_string().ends_with("No props analyzed today."));
    }

    #[test]
    fn test_counts_by_sport_and_direction() {
        let ledger = PropLedger::new();
        ledger.record(&[
            prop("A", Sport::Nba, Some(BetDirection::Over)),
            prop("B", Sport::Nba, Some(BetDirection::Under)),
            prop("C", Sport::Mlb, Some(BetDirection::Over)),
        ]);
        let report = LedgerReportGenerator::new(ledger).generate().unwrap();

        assert_eq!(report.total_props, 3);
        assert_eq!(report.overs, 2);
        assert_eq!(report.unders, 1);
        assert_eq!(report.by_sport.get(&Sport::Nba), Some(&2));
        assert_eq!(report.by_sport.get(&Sport::Mlb), Some(&1));
        assert_eq!(report.recent[0].player_name, "C");
    }

    #[test]
    fn test_sideless_lines_count_toward_neither_side() {
        let ledger = PropLedger::new();
        ledger.record(&[
            prop("A", Sport::Nba, Some(BetDirection::Under)),
            prop("B", Sport::Nba, None),
        ]);
        let report = LedgerReportGenerator::new(ledger).generate().unwrap();

        assert_eq!(report.total_props, 2);
        assert_eq!((report.overs, report.unders), (0, 1));
    }

    #[test]
    fn test_recent_is_capped() {
        let ledger = PropLedger::new();
        let props: Vec<_> = (0..8)
            .map(|i| prop(&format!("P{}", i), Sport::Nhl, Some(BetDirection::Under)))
            .collect();
        ledger.record(&props);
        let report = LedgerReportGenerator::new(ledger).generate().unwrap();

        assert_eq!(report.total_props, 8);
        assert_eq!(report.recent.len(), RECENT_LIMIT);
        assert_eq!(report.recent[0].player_name, "P7");
    }

    #[test]
    fn test_other_dates_are_excluded() {
        let ledger = PropLedger::new();
        ledger.record(&[prop("A", Sport::Nfl, Some(BetDirection::Over))]);
        let generator = LedgerReportGenerator::new(ledger);
        let yesterday = Local::now().date_naive().pred_opt().unwrap();
        assert_eq!(generator.generate_for(yesterday).total_props, 0);
    }
}
