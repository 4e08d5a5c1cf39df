use super::day_id::DayId;
use super::day_schedule::DaySchedule;
use crate::errors::AppError;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use tracing::debug;

/// The recurring opening pattern, one entry per weekday.
///
/// On the wire this is an object keyed `"0".."6"`; in memory it is a fixed
/// array indexed by [`DayId`], so a decoded value always has all seven days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    pub fn from_days(days: [DaySchedule; 7]) -> Self {
        Self { days }
    }

    pub fn get(&self, day: DayId) -> &DaySchedule {
        &self.days[day.index()]
    }

    /// Copy of this week with a single day replaced.
    pub fn with_day(&self, day: DayId, schedule: DaySchedule) -> Self {
        let mut days = self.days.clone();
        days[day.index()] = schedule;
        Self { days }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayId, &DaySchedule)> {
        DayId::ALL.into_iter().zip(self.days.iter())
    }
}

impl Index<DayId> for WeeklySchedule {
    type Output = DaySchedule;

    fn index(&self, day: DayId) -> &DaySchedule {
        self.get(day)
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for (day, schedule) in self.iter() {
            map.serialize_entry(&day.key(), schedule)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WeeklyVisitor)
    }
}

struct WeeklyVisitor;

impl<'de> Visitor<'de> for WeeklyVisitor {
    type Value = WeeklySchedule;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with day schedules keyed \"0\" to \"6\"")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut slots: [Option<DaySchedule>; 7] = Default::default();

        while let Some(key) = access.next_key::<String>()? {
            match DayId::from_key(&key) {
                Ok(day) => {
                    slots[day.index()] = Some(access.next_value()?);
                }
                Err(_) => {
                    debug!(key = %key, "ignoring unknown weekly schedule key");
                    access.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        let mut days: [DaySchedule; 7] = Default::default();
        for (day, slot) in DayId::ALL.into_iter().zip(slots) {
            days[day.index()] = slot.ok_or_else(|| {
                <A::Error as de::Error>::custom(AppError::MissingDay(day.value()))
            })?;
        }

        Ok(WeeklySchedule { days })
    }
}

/// A weekly schedule in which today's entry has been replaced by the
/// matching special override, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedSchedule(WeeklySchedule);

impl ResolvedSchedule {
    pub fn new(week: WeeklySchedule) -> Self {
        Self(week)
    }

    pub fn get(&self, day: DayId) -> &DaySchedule {
        self.0.get(day)
    }

    pub fn as_weekly(&self) -> &WeeklySchedule {
        &self.0
    }
}

impl Index<DayId> for ResolvedSchedule {
    type Output = DaySchedule;

    fn index(&self, day: DayId) -> &DaySchedule {
        self.get(day)
    }
}
