use super::lenient::lenient_vec;
use super::time_slot::TimeSlot;
use serde::{Deserialize, Serialize};

/// Opening rules for one day.
///
/// - `open == false` → closed, `times` ignored
/// - `open == true` and no `times` → open all day
/// - `open == true` with `times` → open during the listed slots only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub open: bool,
    #[serde(
        default,
        deserialize_with = "lenient_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub times: Vec<TimeSlot>,
}

impl DaySchedule {
    pub fn closed() -> Self {
        Self {
            open: false,
            times: Vec::new(),
        }
    }

    pub fn open_all_day() -> Self {
        Self {
            open: true,
            times: Vec::new(),
        }
    }

    pub fn with_slots(times: Vec<TimeSlot>) -> Self {
        Self { open: true, times }
    }

    /// Slots with both ends set, in the order received.
    pub fn valid_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.times.iter().filter(|s| s.is_valid())
    }

    pub fn has_valid_slots(&self) -> bool {
        self.valid_slots().next().is_some()
    }
}
