use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    core::{
        services::{report_service::REPORT_FILE_SUFFIX, ReportService, ReportSnapshot},
        utils::{ensure_dir, PathResolver},
    },
    domain::{DayInput, ProfileInput},
};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Writes report snapshots as pretty JSON into a single export directory.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    reports_dir: PathBuf,
}

impl JsonStorage {
    /// Uses `export_dir` as-is, or `<base>/reports` under the default data directory.
    pub fn new(export_dir: Option<PathBuf>) -> Result<Self> {
        let reports_dir = match export_dir {
            Some(dir) => dir,
            None => PathResolver::reports_dir_in(&PathResolver::base_dir()),
        };
        ensure_dir(&reports_dir)?;
        Ok(Self { reports_dir })
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    pub fn report_path(&self, user_name: &str) -> PathBuf {
        self.reports_dir
            .join(ReportService::report_file_name(user_name))
    }
}

impl StorageBackend for JsonStorage {
    fn export(&self, snapshot: &ReportSnapshot) -> Result<PathBuf> {
        let path = self.report_path(&snapshot.user_info.name);
        save_report_to_path(snapshot, &path)?;
        info!(path = %path.display(), days = snapshot.daily_data.len(), "exported weekly report");
        Ok(path)
    }

    fn load(&self, path: &Path) -> Result<ReportSnapshot> {
        load_report_from_path(path)
    }

    fn list_reports(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.reports_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(REPORT_FILE_SUFFIX) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Writes to a sibling temp file first so a failed write never truncates an older report.
pub fn save_report_to_path(snapshot: &ReportSnapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_report_from_path(path: &Path) -> Result<ReportSnapshot> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// A whole week of raw form input: the profile plus one candidate per day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub profile: ProfileInput,
    #[serde(default)]
    pub days: Vec<DayInput>,
}

pub fn load_plan_from_path(path: &Path) -> Result<WeekPlan> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::SummaryService;
    use crate::domain::{DayEntry, TransportMode, TripType, UserProfile, Weekday};
    use crate::ledger::WeeklyLedger;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = tempfile::tempdir().expect("create temp dir");
        let storage = JsonStorage::new(Some(temp.path().join("exports"))).expect("create storage");
        (storage, temp)
    }

    fn sample_snapshot(name: &str) -> ReportSnapshot {
        let profile =
            UserProfile::new(&ProfileInput::new(name, 40, "Maruti Swift", "Jaipur")).unwrap();
        let mut ledger = WeeklyLedger::new();
        ledger.set(
            Weekday::Monday,
            DayEntry::new("Office", TransportMode::CarPetrol, 12.0, TripType::RoundTrip).unwrap(),
        );
        let aggregate = SummaryService::aggregate(&ledger);
        ReportService::build_snapshot(&profile, &ledger, &aggregate)
    }

    #[test]
    fn export_and_load_roundtrip() {
        let (storage, _temp) = storage_with_temp_dir();
        let snapshot = sample_snapshot("Kabir");
        let path = storage.export(&snapshot).unwrap();
        assert!(path.ends_with("Kabir_travel_report.json"));
        assert_eq!(storage.load(&path).unwrap(), snapshot);
    }

    #[test]
    fn export_leaves_no_temp_file() {
        let (storage, _temp) = storage_with_temp_dir();
        let path = storage.export(&sample_snapshot("Kabir")).unwrap();
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn list_reports_only_returns_exports() {
        let (storage, _temp) = storage_with_temp_dir();
        storage.export(&sample_snapshot("Zoya")).unwrap();
        storage.export(&sample_snapshot("Arjun")).unwrap();
        fs::write(storage.reports_dir().join("notes.txt"), "ignore me").unwrap();
        assert_eq!(
            storage.list_reports().unwrap(),
            vec![
                "Arjun_travel_report.json".to_string(),
                "Zoya_travel_report.json".to_string()
            ]
        );
    }
}
