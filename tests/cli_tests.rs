use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const PLAN: &str = r#"{
  "profile": { "name": "Ravi", "age": 29, "vehicle": "Bajaj Pulsar 150", "city": "Pune" },
  "days": [
    { "day": "Monday", "traveled": true, "destination": "Office", "transport": "🚌 Bus", "distance_km": 10, "trip_type": "One-way" },
    { "day": "Wednesday", "traveled": true, "destination": "Campus", "transport": "Train", "distance_km": 10, "trip_type": "Round-trip" },
    { "day": "Friday", "traveled": true, "destination": "", "transport": "Bus", "distance_km": 4 }
  ]
}"#;

fn cli(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("travel_core_cli").unwrap();
    cmd.arg("--config-dir").arg(config_dir).arg("--no-color");
    cmd
}

#[test]
fn summary_prints_totals_and_skips_bad_days() {
    let temp = tempdir().unwrap();
    let plan = temp.path().join("week.json");
    fs::write(&plan, PLAN).unwrap();

    cli(temp.path())
        .arg("summary")
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 30.0 km"))
        .stdout(predicate::str::contains("Travel days: 2/7"))
        .stdout(predicate::str::contains("Most eco-friendly: 🚌 Bus"))
        .stdout(predicate::str::contains("skipped Friday"));
}

#[test]
fn export_writes_report_into_requested_dir() {
    let temp = tempdir().unwrap();
    let plan = temp.path().join("week.json");
    fs::write(&plan, PLAN).unwrap();
    let out = temp.path().join("reports");

    cli(temp.path())
        .arg("export")
        .arg(&plan)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ravi_travel_report.json"));

    let raw = fs::read_to_string(out.join("Ravi_travel_report.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["weekly_summary"]["total_cost_rs"], 50.0);
    assert_eq!(json["daily_data"]["Wednesday"]["trip_type"], "Round-trip");
    assert!(json["daily_data"].get("Friday").is_none());
}

#[test]
fn rates_lists_every_mode() {
    let temp = tempdir().unwrap();
    cli(temp.path())
        .arg("rates")
        .assert()
        .success()
        .stdout(predicate::str::contains("🏍️ Motorcycle/Scooter"))
        .stdout(predicate::str::contains("🛵 Electric Scooter"));
}

#[test]
fn unknown_command_fails() {
    let temp = tempdir().unwrap();
    cli(temp.path())
        .arg("fly")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command `fly`"));
}

#[test]
fn underage_profile_fails() {
    let temp = tempdir().unwrap();
    let plan = temp.path().join("week.json");
    fs::write(
        &plan,
        r#"{ "profile": { "name": "Ravi", "age": 15, "vehicle": "Bajaj Pulsar 150", "city": "Pune" } }"#,
    )
    .unwrap();
    cli(temp.path())
        .arg("summary")
        .arg(&plan)
        .assert()
        .failure()
        .stderr(predicate::str::contains("age"));
}
