use super::day_schedule::DaySchedule;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A full day schedule that replaces the weekly pattern on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialOverride {
    /// `YYYY-MM-DD`. Compared as a string, so a malformed or missing date
    /// simply never matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub schedule: DaySchedule,
}

impl SpecialOverride {
    pub fn new(date: &str, schedule: DaySchedule) -> Self {
        Self {
            date: Some(date.to_string()),
            schedule,
        }
    }

    pub fn applies_to(&self, date: NaiveDate) -> bool {
        self.date
            .as_deref()
            .is_some_and(|d| d == format_date(date))
    }
}
