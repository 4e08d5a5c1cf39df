//! Formatting utilities used for CLI and export outputs.

use crate::config::Labels;
use crate::models::{DayRenderState, OpenStatus, RenderedSlot};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Label shown next to a day row.
///
/// Closed days read "closed today" on today's row and "closed" elsewhere;
/// an open day with slots shows no label of its own, only the slot list.
pub fn day_label<'a>(state: &DayRenderState, labels: &'a Labels) -> &'a str {
    match state {
        DayRenderState::Closed { today: true } => &labels.closed_today,
        DayRenderState::Closed { today: false } => &labels.closed,
        DayRenderState::OpenAllDay => &labels.open_all_day,
        DayRenderState::OpenWithSlots { .. } => "",
    }
}

pub fn status_label(status: OpenStatus, labels: &Labels) -> &str {
    match status {
        OpenStatus::Open => &labels.open_now,
        OpenStatus::Closed => &labels.closed_now,
    }
}

/// `09:00 - 17:00`
pub fn slot_range(slot: &RenderedSlot) -> String {
    format!("{} - {}", slot.start, slot.end)
}

/// All slots of a row joined for a single table cell.
pub fn slots_summary(state: &DayRenderState) -> String {
    state
        .slots()
        .iter()
        .map(slot_range)
        .collect::<Vec<_>>()
        .join(", ")
}
