//! Per-day presentation state.

use crate::core::containment::is_within;
use crate::models::{DayId, DayRenderState, DayRow, DaySchedule, RenderedSlot, ResolvedSchedule};
use chrono::NaiveTime;
use tracing::trace;

/// Decide how one day is presented.
///
/// Priority: closed, then open without usable slots, then open with slots.
/// Slots are only marked active on today's row.
pub fn render_day(
    day: &DaySchedule,
    day_id: DayId,
    is_today: bool,
    now: NaiveTime,
) -> DayRenderState {
    trace!(day = day_id.name(), open = day.open, is_today, "rendering day");

    if !day.open {
        return DayRenderState::Closed { today: is_today };
    }

    let slots: Vec<RenderedSlot> = day
        .valid_slots()
        .map(|slot| RenderedSlot {
            start: slot.start_str().to_string(),
            end: slot.end_str().to_string(),
            is_active_now: is_today && is_within(slot, now),
        })
        .collect();

    // Open with nothing usable falls back to open all day.
    if slots.is_empty() {
        DayRenderState::OpenAllDay
    } else {
        DayRenderState::OpenWithSlots { slots }
    }
}

/// Render the seven days of `resolved`, starting from `first_day`.
pub fn render_week(
    resolved: &ResolvedSchedule,
    today_day_id: DayId,
    now: NaiveTime,
    first_day: DayId,
) -> Vec<DayRow> {
    DayId::week_from(first_day)
        .into_iter()
        .map(|day_id| {
            let is_today = day_id == today_day_id;
            DayRow {
                day_id,
                is_today,
                state: render_day(resolved.get(day_id), day_id, is_today, now),
            }
        })
        .collect()
}
