use super::lenient::lenient_vec;
use super::special::SpecialOverride;
use super::weekly::WeeklySchedule;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The `bh` block of a listing-detail response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub bhs: WeeklySchedule,
    /// Date overrides in the order received (not necessarily sorted).
    #[serde(default, deserialize_with = "lenient_vec")]
    pub special_bhs: Vec<SpecialOverride>,
}

impl BusinessHours {
    pub fn new(bhs: WeeklySchedule, special_bhs: Vec<SpecialOverride>) -> Self {
        Self { bhs, special_bhs }
    }

    /// Decode either a whole listing payload (`{"bh": {...}, ...}`) or the
    /// bare `bh` object.
    pub fn from_json_str(input: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(mut value: Value) -> AppResult<Self> {
        let inner = match value.get_mut("bh") {
            Some(bh) => bh.take(),
            None => value,
        };
        Ok(serde_json::from_value(inner)?)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
