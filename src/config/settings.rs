//! User settings for snapkeep
//!
//! Persisted preferences: the default destination folder for exports and an
//! optional spool directory override.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::SnapkeepPaths;
use crate::error::SnapkeepError;

/// User settings for snapkeep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default destination folder for exports and dumps
    ///
    /// Overridden per run with `--remote`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_root: Option<PathBuf>,

    /// Spool directory override for staging exports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spool_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            remote_root: None,
            spool_dir: None,
        }
    }
}

impl Settings {
    /// Resolve the spool directory: the override if set, otherwise the
    /// default under the data directory.
    pub fn spool_dir(&self, paths: &SnapkeepPaths) -> PathBuf {
        self.spool_dir.clone().unwrap_or_else(|| paths.spool_dir())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SnapkeepPaths) -> Result<Self, SnapkeepError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SnapkeepError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SnapkeepError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SnapkeepPaths) -> Result<(), SnapkeepError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SnapkeepError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SnapkeepError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.remote_root.is_none());
        assert!(settings.spool_dir.is_none());
    }

    #[test]
    fn test_spool_dir_default_and_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SnapkeepPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.spool_dir(&paths), temp_dir.path().join("spool"));

        settings.spool_dir = Some(PathBuf::from("/var/tmp/snapkeep"));
        assert_eq!(settings.spool_dir(&paths), PathBuf::from("/var/tmp/snapkeep"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SnapkeepPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.remote_root = Some(PathBuf::from("/mnt/offsite/snapshots"));

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(
            loaded.remote_root,
            Some(PathBuf::from("/mnt/offsite/snapshots"))
        );
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SnapkeepPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(settings.remote_root.is_none());
    }
}
