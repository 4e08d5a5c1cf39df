use crate::models::DayId;
use crate::utils::date;
use chrono::{Local, NaiveDate, NaiveTime, Timelike};

/// The instant an evaluation is made for, already localized to the
/// listing's time zone by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    pub today: NaiveDate,
    pub now: NaiveTime,
}

impl Clock {
    pub fn at(today: NaiveDate, now: NaiveTime) -> Self {
        Self { today, now }
    }

    /// Read the device clock, truncated to the minute.
    pub fn system() -> Self {
        let now = Local::now().time();
        Self {
            today: date::today(),
            now: now.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now),
        }
    }

    /// Fill whatever the caller did not pin down from the device clock.
    pub fn with_overrides(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Self {
        let system = Self::system();
        Self {
            today: date.unwrap_or(system.today),
            now: time.unwrap_or(system.now),
        }
    }

    pub fn today_day_id(&self) -> DayId {
        DayId::from_date(self.today)
    }
}
