pub mod business_hours;
pub mod day_id;
pub mod day_schedule;
mod lenient;
pub mod render_state;
pub mod special;
pub mod status;
pub mod time_slot;
pub mod weekly;

pub use business_hours::BusinessHours;
pub use day_id::DayId;
pub use day_schedule::DaySchedule;
pub use render_state::{DayRenderState, DayRow, RenderedSlot};
pub use special::SpecialOverride;
pub use status::OpenStatus;
pub use time_slot::TimeSlot;
pub use weekly::{ResolvedSchedule, WeeklySchedule};
