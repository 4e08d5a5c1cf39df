use serde::{Deserialize, Serialize};

/// An opening window within a day, as `"HH:mm"` strings.
///
/// Both ends are optional on the wire; a slot is only usable when both are
/// present and non-empty (see [`TimeSlot::is_valid`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl TimeSlot {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        is_present(self.start.as_deref()) && is_present(self.end.as_deref())
    }

    pub fn start_str(&self) -> &str {
        self.start.as_deref().unwrap_or("")
    }

    pub fn end_str(&self) -> &str {
        self.end.as_deref().unwrap_or("")
    }
}

fn is_present(s: Option<&str>) -> bool {
    s.is_some_and(|v| !v.is_empty())
}
