use super::day_id::DayId;
use serde::Serialize;

/// One slot as presented in a day row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSlot {
    pub start: String,
    pub end: String,
    /// Only ever true on today's row.
    pub is_active_now: bool,
}

/// Presentation state of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DayRenderState {
    /// `today` selects the "closed today" label over the plain "closed" one.
    Closed { today: bool },
    /// Open with no usable slots: either none were given or all were invalid.
    OpenAllDay,
    OpenWithSlots { slots: Vec<RenderedSlot> },
}

impl DayRenderState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DayRenderState::Closed { .. })
    }

    pub fn slots(&self) -> &[RenderedSlot] {
        match self {
            DayRenderState::OpenWithSlots { slots } => slots,
            _ => &[],
        }
    }

    pub fn has_active_slot(&self) -> bool {
        self.slots().iter().any(|s| s.is_active_now)
    }
}

/// A rendered row of the week table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    pub day_id: DayId,
    pub is_today: bool,
    #[serde(flatten)]
    pub state: DayRenderState,
}
