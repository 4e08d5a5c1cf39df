use crate::core::clock::Clock;
use crate::core::{renderer, resolver, status};
use crate::models::{BusinessHours, DayId, DayRow, OpenStatus, ResolvedSchedule};
use crate::utils::{date, time};
use serde::Serialize;

/// Everything a listing screen needs for its hours section.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub date: String,
    pub now: String,
    pub today: DayId,
    pub status: OpenStatus,
    pub resolved: ResolvedSchedule,
    pub week: Vec<DayRow>,
}

pub struct Core;

impl Core {
    /// Resolve, render and evaluate in one pass.
    pub fn evaluate(hours: &BusinessHours, clock: &Clock, week_start: DayId) -> Evaluation {
        let today = clock.today_day_id();
        let resolved = resolver::resolve(&hours.bhs, &hours.special_bhs, clock.today, today);
        let status = status::current_status(&resolved, today, clock.now);
        let week = renderer::render_week(&resolved, today, clock.now, week_start);

        Evaluation {
            date: date::format_date(clock.today),
            now: time::format_time(clock.now),
            today,
            status,
            resolved,
            week,
        }
    }

    pub fn resolve_for(hours: &BusinessHours, clock: &Clock) -> ResolvedSchedule {
        resolver::resolve(
            &hours.bhs,
            &hours.special_bhs,
            clock.today,
            clock.today_day_id(),
        )
    }
}
