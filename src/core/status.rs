//! Live open/closed verdict for today.

use crate::core::containment::is_within;
use crate::models::{DayId, OpenStatus, ResolvedSchedule};
use chrono::NaiveTime;

/// The one source of truth for "Open now" / "Closed now".
///
/// Same priority as [`render_day`](crate::core::renderer::render_day):
/// a closed day is closed, an open day without usable slots is open, and an
/// open day with slots is open only while `now` sits inside one of them.
pub fn current_status(
    resolved: &ResolvedSchedule,
    today_day_id: DayId,
    now: NaiveTime,
) -> OpenStatus {
    let day = resolved.get(today_day_id);

    if !day.open {
        return OpenStatus::Closed;
    }

    if !day.has_valid_slots() {
        return OpenStatus::Open;
    }

    if day.valid_slots().any(|slot| is_within(slot, now)) {
        OpenStatus::Open
    } else {
        OpenStatus::Closed
    }
}
