pub mod json_backend;

use std::path::{Path, PathBuf};

use crate::{core::services::ReportSnapshot, errors::TrackerError};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Destination for exported weekly reports.
pub trait StorageBackend: Send + Sync {
    /// Writes the snapshot and returns where it landed.
    fn export(&self, snapshot: &ReportSnapshot) -> Result<PathBuf>;
    fn load(&self, path: &Path) -> Result<ReportSnapshot>;
    fn list_reports(&self) -> Result<Vec<String>>;
}

pub use json_backend::{load_plan_from_path, JsonStorage, WeekPlan};
