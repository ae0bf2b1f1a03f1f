//! Builds the exportable weekly report.
//!
//! Field names below are a compatibility contract with previously exported
//! reports; do not rename them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DayEntry, NamedEntity, TransportMode, TripType, UserProfile, Weekday};
use crate::ledger::WeeklyLedger;

use super::summary_service::WeeklyAggregate;

pub const REPORT_FILE_SUFFIX: &str = "_travel_report.json";
const FALLBACK_FILE_STEM: &str = "traveler";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    pub user_info: UserInfo,
    pub weekly_summary: WeeklySummary,
    pub daily_data: BTreeMap<Weekday, DailyRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub vehicle: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub total_distance_km: f64,
    pub total_cost_rs: f64,
    pub total_emission_g: f64,
    pub travel_days: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub traveled: bool,
    pub destination: String,
    pub transport_type: TransportMode,
    pub distance: f64,
    pub actual_distance: f64,
    pub trip_type: TripType,
    pub cost: f64,
    pub emission: f64,
}

impl From<&DayEntry> for DailyRecord {
    fn from(entry: &DayEntry) -> Self {
        Self {
            traveled: true,
            destination: entry.destination().to_string(),
            transport_type: entry.transport(),
            distance: entry.entered_distance_km(),
            actual_distance: entry.actual_distance_km(),
            trip_type: entry.trip_type(),
            cost: entry.cost(),
            emission: entry.emission_grams(),
        }
    }
}

pub struct ReportService;

impl ReportService {
    /// Assembles profile, ledger and totals into the export shape. Read-only.
    pub fn build_snapshot(
        profile: &UserProfile,
        ledger: &WeeklyLedger,
        aggregate: &WeeklyAggregate,
    ) -> ReportSnapshot {
        ReportSnapshot {
            user_info: UserInfo {
                name: profile.name().to_string(),
                vehicle: profile.vehicle().to_string(),
                city: profile.city().to_string(),
            },
            weekly_summary: WeeklySummary {
                total_distance_km: aggregate.total_distance_km,
                total_cost_rs: aggregate.total_cost,
                total_emission_g: aggregate.total_emission_grams,
                travel_days: aggregate.travel_days,
            },
            daily_data: ledger
                .entries()
                .map(|(day, entry)| (day, DailyRecord::from(entry)))
                .collect(),
        }
    }

    /// `{name}_travel_report.json`, with characters unsafe in file names replaced.
    pub fn report_file_name(name: &str) -> String {
        let stem: String = name
            .trim()
            .chars()
            .map(|ch| {
                if ch.is_control() || matches!(ch, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
                {
                    '_'
                } else {
                    ch
                }
            })
            .collect();
        let stem = stem.trim_matches('.');
        if stem.is_empty() {
            format!("{FALLBACK_FILE_STEM}{REPORT_FILE_SUFFIX}")
        } else {
            format!("{stem}{REPORT_FILE_SUFFIX}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_follows_pattern() {
        assert_eq!(
            ReportService::report_file_name("Meera"),
            "Meera_travel_report.json"
        );
    }

    #[test]
    fn file_name_cannot_escape_directory() {
        assert_eq!(
            ReportService::report_file_name("../etc/passwd"),
            "_etc_passwd_travel_report.json"
        );
        assert_eq!(
            ReportService::report_file_name("   "),
            "traveler_travel_report.json"
        );
    }
}
