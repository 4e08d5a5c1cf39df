use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Day of the week as numbered by the listing API: 0 = Sunday … 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayId(u8);

impl DayId {
    pub const SUNDAY: DayId = DayId(0);
    pub const MONDAY: DayId = DayId(1);
    pub const TUESDAY: DayId = DayId(2);
    pub const WEDNESDAY: DayId = DayId(3);
    pub const THURSDAY: DayId = DayId(4);
    pub const FRIDAY: DayId = DayId(5);
    pub const SATURDAY: DayId = DayId(6);

    pub const ALL: [DayId; 7] = [
        DayId::SUNDAY,
        DayId::MONDAY,
        DayId::TUESDAY,
        DayId::WEDNESDAY,
        DayId::THURSDAY,
        DayId::FRIDAY,
        DayId::SATURDAY,
    ];

    pub fn new(id: u8) -> AppResult<Self> {
        if id <= 6 {
            Ok(DayId(id))
        } else {
            Err(AppError::InvalidDayId(id.to_string()))
        }
    }

    /// Parse the string keys used by the wire format ("0".."6").
    pub fn from_key(key: &str) -> AppResult<Self> {
        let id = key
            .trim()
            .parse::<u8>()
            .map_err(|_| AppError::InvalidDayId(key.to_string()))?;
        DayId::new(id)
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        // num_days_from_sunday() is always 0..=6
        DayId(weekday.num_days_from_sunday() as u8)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        DayId::from_weekday(date.weekday())
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn key(self) -> String {
        self.0.to_string()
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            _ => "Saturday",
        }
    }

    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    /// The seven days starting from `first`, wrapping around the week.
    pub fn week_from(first: DayId) -> [DayId; 7] {
        let mut out = DayId::ALL;
        out.rotate_left(first.index());
        out
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
