use crate::config::Labels;
use crate::core::Evaluation;
use crate::errors::AppResult;
use crate::models::DayRenderState;
use crate::utils::formatting::{day_label, slot_range, slots_summary};
use csv::Writer;
use std::path::Path;

/// Writes one row per day of the evaluated week.
pub fn write_csv(path: &Path, eval: &Evaluation, labels: &Labels) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "day_id", "day", "is_today", "state", "label", "slots", "active_slot",
    ])?;

    for row in &eval.week {
        let state = match row.state {
            DayRenderState::Closed { .. } => "closed",
            DayRenderState::OpenAllDay => "open_all_day",
            DayRenderState::OpenWithSlots { .. } => "open_with_slots",
        };
        let active = row
            .state
            .slots()
            .iter()
            .filter(|s| s.is_active_now)
            .map(slot_range)
            .collect::<Vec<_>>()
            .join(", ");

        wtr.write_record([
            row.day_id.to_string(),
            row.day_id.name().to_string(),
            row.is_today.to_string(),
            state.to_string(),
            day_label(&row.state, labels).to_string(),
            slots_summary(&row.state),
            active,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
