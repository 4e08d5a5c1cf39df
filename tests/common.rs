#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use openhours::models::{BusinessHours, DaySchedule, TimeSlot, WeeklySchedule};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn oh() -> Command {
    cargo_bin_cmd!("openhours")
}

/// A config path that does not exist, so commands run with defaults and never
/// touch the user's real configuration.
pub fn no_config(name: &str) -> String {
    temp_out(&format!("{name}_missing"), "conf")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_openhours.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a listing JSON document to the temp dir and return its path
pub fn write_listing(name: &str, json: &str) -> String {
    let path = temp_out(name, "json");
    fs::write(&path, json).expect("write listing");
    path
}

/// Listing payload used across the CLI tests.
///
/// Sunday closed, Monday split shift, Tuesday open all day, Wednesday with an
/// unusable slot, Thursday to Saturday regular hours. Monday 2025-06-16 is
/// overridden twice (the second entry wins), Friday 2025-06-20 once.
pub const SAMPLE_LISTING: &str = r#"{
    "id": 4711,
    "title": "Corner bakery",
    "bh": {
        "bhs": {
            "0": { "open": false },
            "1": { "open": true, "times": [
                { "start": "08:00", "end": "12:00" },
                { "start": "14:00", "end": "18:00" }
            ] },
            "2": { "open": true },
            "3": { "open": true, "times": [ { "start": "", "end": "18:00" } ] },
            "4": { "open": true, "times": [ { "start": "09:00", "end": "17:00" } ] },
            "5": { "open": true, "times": [ { "start": "09:00", "end": "17:00" } ] },
            "6": { "open": true, "times": [ { "start": "10:00", "end": "14:00" } ] }
        },
        "special_bhs": [
            { "date": "2025-06-20", "open": false },
            "garbage",
            { "date": "2025-06-23", "open": true, "times": [ { "start": "10:00", "end": "11:00" } ] },
            { "date": "2025-06-23", "open": false }
        ]
    }
}"#;

pub fn slots(pairs: &[(&str, &str)]) -> Vec<TimeSlot> {
    pairs.iter().map(|(s, e)| TimeSlot::new(s, e)).collect()
}

/// Week with Monday split in two slots and every other day open all day.
pub fn split_monday_week() -> WeeklySchedule {
    let mut days: [DaySchedule; 7] = Default::default();
    for d in days.iter_mut() {
        *d = DaySchedule::open_all_day();
    }
    days[1] = DaySchedule::with_slots(slots(&[("08:00", "12:00"), ("14:00", "18:00")]));
    WeeklySchedule::from_days(days)
}

pub fn all_day_week() -> WeeklySchedule {
    WeeklySchedule::from_days(std::array::from_fn(|_| DaySchedule::open_all_day()))
}

pub fn sample_hours() -> BusinessHours {
    BusinessHours::from_json_str(SAMPLE_LISTING).expect("sample listing decodes")
}
