use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_LISTING, no_config, oh, temp_out, write_listing};

#[test]
fn test_status_open_during_slot() {
    let listing = write_listing("status_open", SAMPLE_LISTING);
    let cfg = no_config("status_open");

    oh()
        .args(["--config", &cfg, "status", &listing, "--date", "2025-06-16", "--now", "09:30"])
        .assert()
        .success()
        .stdout(contains("Open now"));
}

#[test]
fn test_status_closed_between_slots() {
    let listing = write_listing("status_gap", SAMPLE_LISTING);
    let cfg = no_config("status_gap");

    oh()
        .args(["--config", &cfg, "status", &listing, "--date", "2025-06-16", "--now", "13:00"])
        .assert()
        .success()
        .stdout(contains("Closed now"));
}

#[test]
fn test_status_json_output() {
    let listing = write_listing("status_json", SAMPLE_LISTING);
    let cfg = no_config("status_json");

    let out = oh()
        .args([
            "--config", &cfg, "status", &listing, "--date", "2025-06-20", "--now", "10:00",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["status"], "closed");
    assert_eq!(value["day_id"], 5);
    assert_eq!(value["date"], "2025-06-20");
}

#[test]
fn test_status_rejects_bad_time() {
    let listing = write_listing("status_bad_time", SAMPLE_LISTING);
    let cfg = no_config("status_bad_time");

    oh()
        .args(["--config", &cfg, "status", &listing, "--now", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_status_reports_incomplete_week() {
    let listing = write_listing("status_incomplete", r#"{"bh": {"bhs": {"0": {"open": true}}}}"#);
    let cfg = no_config("status_incomplete");

    oh()
        .args(["--config", &cfg, "status", &listing, "--now", "10:00"])
        .assert()
        .failure()
        .stderr(contains("no entry for day 1"));
}

#[test]
fn test_week_lists_all_days() {
    let listing = write_listing("week_all", SAMPLE_LISTING);
    let cfg = no_config("week_all");

    oh()
        .args(["--config", &cfg, "week", &listing, "--date", "2025-06-16", "--now", "15:00"])
        .assert()
        .success()
        .stdout(
            contains("Sunday")
                .and(contains("Saturday"))
                .and(contains("08:00 - 12:00"))
                .and(contains("14:00 - 18:00"))
                .and(contains("Open 24 hours"))
                .and(contains("Closed")),
        );
}

#[test]
fn test_week_shows_closed_today_label() {
    let listing = write_listing("week_closed_today", SAMPLE_LISTING);
    let cfg = no_config("week_closed_today");

    oh()
        .args(["--config", &cfg, "week", &listing, "--date", "2025-06-15", "--now", "12:00"])
        .assert()
        .success()
        .stdout(contains("Closed today"));
}

#[test]
fn test_resolve_prints_wire_shape() {
    let listing = write_listing("resolve_wire", SAMPLE_LISTING);
    let cfg = no_config("resolve_wire");

    let out = oh()
        .args(["--config", &cfg, "resolve", &listing, "--date", "2025-06-23"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["1"]["open"], false);
    assert_eq!(value["2"]["open"], true);
    assert_eq!(value["5"]["open"], true, "friday override is for another date");
}

#[test]
fn test_export_csv() {
    let listing = write_listing("export_csv", SAMPLE_LISTING);
    let cfg = no_config("export_csv");
    let out = temp_out("export_csv", "csv");

    oh()
        .args([
            "--config", &cfg, "export", &listing, "--format", "csv", "--output", &out, "--date",
            "2025-06-16", "--now", "09:00",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("day_id,day,is_today,state,label,slots,active_slot")
    );
    assert!(content.contains("1,Monday,true,open_with_slots,,\"08:00 - 12:00, 14:00 - 18:00\",08:00 - 12:00"));
    assert!(content.contains("0,Sunday,false,closed,Closed,,"));
    assert!(content.contains("3,Wednesday,false,open_all_day,Open 24 hours,,"));
}

#[test]
fn test_export_json_with_force() {
    let listing = write_listing("export_json", SAMPLE_LISTING);
    let cfg = no_config("export_json");
    let out = temp_out("export_json_out", "json");
    fs::write(&out, "stale").unwrap();

    oh()
        .args([
            "--config", &cfg, "export", &listing, "--format", "json", "--output", &out,
            "--date", "2025-06-17", "--now", "23:00", "--force",
        ])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["status"], "open");
    assert_eq!(value["week"].as_array().unwrap().len(), 7);
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let listing = write_listing("export_refuse", SAMPLE_LISTING);
    let cfg = no_config("export_refuse");
    let out = temp_out("export_refuse", "csv");
    fs::write(&out, "keep me").unwrap();

    oh()
        .args(["--config", &cfg, "export", &listing, "--output", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("was not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_init_then_print_config() {
    let cfg = temp_out("init_config", "conf");

    oh().args(["--config", &cfg, "init"]).assert().success();
    assert!(fs::metadata(&cfg).is_ok());

    oh()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("week_starts_on: sunday").and(contains("closed_today: Closed today")));
}

#[test]
fn test_custom_labels_from_config() {
    let cfg = temp_out("custom_labels", "conf");
    fs::write(
        &cfg,
        "week_starts_on: monday\ncolor: false\nlabels:\n  open_now: Geöffnet\n",
    )
    .unwrap();
    let listing = write_listing("custom_labels", SAMPLE_LISTING);

    oh()
        .args(["--config", &cfg, "status", &listing, "--date", "2025-06-17", "--now", "08:00"])
        .assert()
        .success()
        .stdout("Geöffnet\n");
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = temp_out("broken_config", "conf");
    fs::write(&cfg, "labels: [not, a, map]\n").unwrap();
    let listing = write_listing("broken_config", SAMPLE_LISTING);

    oh()
        .args(["--config", &cfg, "status", &listing])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_plain_output_when_color_disabled() {
    let cfg = temp_out("plain_output", "conf");
    fs::write(&cfg, "color: false\n").unwrap();
    let listing = write_listing("plain_output", SAMPLE_LISTING);
    let out = temp_out("plain_output", "csv");

    oh()
        .args([
            "--config", &cfg, "export", &listing, "--output", &out, "--date", "2025-06-16",
            "--now", "09:00", "--force",
        ])
        .assert()
        .success()
        .stdout(contains("ok: CSV export completed").and(contains("\x1b[").not()));

    oh()
        .args(["--config", &cfg, "week", &listing, "--date", "2025-06-16", "--now", "09:00"])
        .assert()
        .success()
        .stdout(contains("08:00 - 12:00").and(contains("\x1b[").not()));

    // init keeps honoring the setting it is about to replace
    oh()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("ok: Config file").and(contains("\x1b[").not()));
}

#[test]
fn test_colored_output_by_default() {
    let cfg = no_config("colored_output");
    let listing = write_listing("colored_output", SAMPLE_LISTING);
    let out = temp_out("colored_output_out", "json");

    oh()
        .args([
            "--config", &cfg, "export", &listing, "--format", "json", "--output", &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("\x1b[").and(contains("JSON export completed")));
}
