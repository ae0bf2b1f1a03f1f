use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, PathResolver},
    errors::TrackerError,
};

const TMP_SUFFIX: &str = "tmp";

/// User preferences for the front end and the export location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    #[serde(default = "Config::default_true")]
    pub show_live_estimate: bool,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            export_dir: None,
            show_live_estimate: true,
            ui_color_enabled: true,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    fn default_true() -> bool {
        true
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(PathResolver::base_dir())
    }

    /// Nothing is created on disk until the first `save`.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: PathResolver::config_file_in(&base),
        }
    }

    /// Reads the config file, falling back to defaults when it does not exist yet.
    pub fn load(&self) -> Result<Config, TrackerError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            TrackerError::ConfigError(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
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

fn write_atomic(path: &Path, data: &str) -> Result<(), TrackerError> {
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

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn save_then_load_keeps_values() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        let config = Config {
            currency_symbol: "Rs".into(),
            export_dir: Some(temp.path().join("out")),
            show_live_estimate: false,
            ui_color_enabled: false,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        fs::write(manager.path(), r#"{ "ui_color_enabled": false }"#).unwrap();
        let config = manager.load().unwrap();
        assert!(!config.ui_color_enabled);
        assert!(config.show_live_estimate);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        fs::write(manager.path(), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(TrackerError::ConfigError(_))));
    }
}
