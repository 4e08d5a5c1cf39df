//! Merge the weekly pattern with today's special override.

use crate::models::{DayId, ResolvedSchedule, SpecialOverride, WeeklySchedule};
use chrono::NaiveDate;
use tracing::debug;

/// Build the schedule that applies for `today`.
///
/// Only the entry at `today_day_id` can change. When several overrides carry
/// today's date the last one in the list wins. Overrides for any other date
/// are left alone, even if they fall inside the displayed week.
pub fn resolve(
    weekly: &WeeklySchedule,
    overrides: &[SpecialOverride],
    today: NaiveDate,
    today_day_id: DayId,
) -> ResolvedSchedule {
    let winner = overrides.iter().rfind(|o| o.applies_to(today));

    match winner {
        Some(special) => {
            debug!(
                date = %today,
                day = today_day_id.name(),
                open = special.schedule.open,
                "special override applied"
            );
            ResolvedSchedule::new(weekly.with_day(today_day_id, special.schedule.clone()))
        }
        None => ResolvedSchedule::new(weekly.clone()),
    }
}
