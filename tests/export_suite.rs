use std::fs;

use tempfile::tempdir;
use travel_core::core::services::{ReportService, SummaryService};
use travel_core::domain::{DayInput, ProfileInput};
use travel_core::ledger::TrackerSession;
use travel_core::storage::{JsonStorage, StorageBackend};

fn meera_week() -> TrackerSession {
    let mut session = TrackerSession::new();
    session
        .save_profile(&ProfileInput::new("Meera", 27, "Honda Activa 6G", "Kochi"))
        .unwrap();
    session
        .record_day(&DayInput::travel("Monday", "Office", "Bus", 10.0, "One-way"))
        .unwrap();
    session
}

#[test]
fn exported_json_keeps_report_shape() {
    let session = meera_week();
    let aggregate = SummaryService::aggregate(session.ledger());
    let snapshot =
        ReportService::build_snapshot(session.profile().unwrap(), session.ledger(), &aggregate);
    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    insta::assert_snapshot!(json, @r#"
{
  "user_info": {
    "name": "Meera",
    "vehicle": "Honda Activa 6G",
    "city": "Kochi"
  },
  "weekly_summary": {
    "total_distance_km": 10.0,
    "total_cost_rs": 20.0,
    "total_emission_g": 400.0,
    "travel_days": 1
  },
  "daily_data": {
    "Monday": {
      "traveled": true,
      "destination": "Office",
      "transport_type": "🚌 Bus",
      "distance": 10.0,
      "actual_distance": 10.0,
      "trip_type": "One-way",
      "cost": 20.0,
      "emission": 400.0
    }
  }
}
"#);
}

#[test]
fn export_writes_named_file_and_overwrites_in_place() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
    let mut session = meera_week();

    let aggregate = SummaryService::aggregate(session.ledger());
    let first = ReportService::build_snapshot(session.profile().unwrap(), session.ledger(), &aggregate);
    let path = storage.export(&first).unwrap();
    assert_eq!(path, temp.path().join("Meera_travel_report.json"));

    session
        .record_day(&DayInput::travel("Friday", "Airport", "Flight (Domestic)", 300.0, "One-way"))
        .unwrap();
    let aggregate = SummaryService::aggregate(session.ledger());
    let second =
        ReportService::build_snapshot(session.profile().unwrap(), session.ledger(), &aggregate);
    let again = storage.export(&second).unwrap();
    assert_eq!(again, path);

    let reloaded = storage.load(&path).unwrap();
    assert_eq!(reloaded.weekly_summary.travel_days, 2);
    assert_eq!(reloaded.weekly_summary.total_emission_g, 60_400.0);
    assert_eq!(storage.list_reports().unwrap().len(), 1);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"✈️ Flight (Domestic)\""));
}

#[test]
fn snapshot_is_rebuilt_from_current_state() {
    let mut session = meera_week();
    let build = |session: &TrackerSession| {
        let aggregate = SummaryService::aggregate(session.ledger());
        ReportService::build_snapshot(session.profile().unwrap(), session.ledger(), &aggregate)
    };
    let before = build(&session);
    assert_eq!(before, build(&session));

    session.record_day(&DayInput::no_travel("Monday")).unwrap();
    let after = build(&session);
    assert!(after.daily_data.is_empty());
    assert_eq!(after.weekly_summary.total_distance_km, 0.0);
}
