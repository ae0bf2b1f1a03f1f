use std::{fs, io, path::Path, path::PathBuf};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".travel_core";
const CONFIG_FILE: &str = "config.json";
const REPORTS_DIR: &str = "reports";

/// Resolves the crate's data directories under a base directory.
pub struct PathResolver;

impl PathResolver {
    /// `~/.travel_core`, or `./.travel_core` when no home directory is known.
    pub fn base_dir() -> PathBuf {
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        root.unwrap_or_else(Self::base_dir)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }

    pub fn reports_dir_in(base: &Path) -> PathBuf {
        base.join(REPORTS_DIR)
    }
}

/// Creates `path` and its parents when missing.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_base() {
        let base = PathBuf::from("/tmp/tc");
        assert_eq!(PathResolver::config_file_in(&base), base.join("config.json"));
        assert_eq!(PathResolver::reports_dir_in(&base), base.join("reports"));
        assert_eq!(PathResolver::resolve_base(Some(base.clone())), base);
    }
}
