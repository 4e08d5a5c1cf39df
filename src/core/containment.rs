//! Time-of-day containment for opening slots.

use crate::models::TimeSlot;
use crate::utils::time::parse_time;
use chrono::NaiveTime;

/// `true` iff `start <= now < end`.
///
/// Times carry no date, so a slot whose end is earlier than its start
/// (22:00 - 02:00) never contains anything. Slots whose ends are missing or
/// do not parse never contain anything either.
pub fn is_within(slot: &TimeSlot, now: NaiveTime) -> bool {
    let (Some(start), Some(end)) = (
        slot.start.as_deref().and_then(parse_time),
        slot.end.as_deref().and_then(parse_time),
    ) else {
        return false;
    };

    start <= now && now < end
}
