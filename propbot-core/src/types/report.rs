//! Daily report summarizing analyzed props.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{prop::Prop, sport::Sport};

/// Summary of the props analyzed so far on `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub date: NaiveDate,
    pub total_props: usize,
    pub by_sport: BTreeMap<Sport, usize>,
    pub overs: usize,
    pub unders: usize,
    /// Most recent props, newest first.
    pub recent: Vec<Prop>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.date.format("%Y-%m-%d");
        if self.total_props == 0 {
            writeln!(f, "Daily Report - {}", date)?;
            writeln!(f)?;
            return write!(f, "No props analyzed today.");
        }

        writeln!(f, "Daily Prop Analysis Report")?;
        writeln!(f, "Date: {}", date)?;
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "  Total Props Analyzed: {}", self.total_props)?;
        writeln!(f, "  Over: {} | Under: {}", self.overs, self.unders)?;
        for (sport, count) in &self.by_sport {
            writeln!(f, "  {}: {}", sport, count)?;
        }
        writeln!(f)?;
        write!(f, "Recent:")?;
        for prop in &self.recent {
            write!(f, "\n  - {}", prop)?;
        }
        Ok(())
    }
}
