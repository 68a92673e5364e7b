//! Path management for snapkeep
//!
//! Provides XDG-compliant path resolution for configuration and the export
//! spool directory.
//!
//! ## Path Resolution Order
//!
//! 1. `SNAPKEEP_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/snapkeep` or `~/.config/snapkeep`
//! 3. Windows: `%APPDATA%\snapkeep`

use std::path::PathBuf;

use crate::error::SnapkeepError;

/// Manages all paths used by snapkeep
#[derive(Debug, Clone)]
pub struct SnapkeepPaths {
    /// Base directory for all snapkeep data
    base_dir: PathBuf,
}

impl SnapkeepPaths {
    /// Create a new SnapkeepPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SnapkeepError> {
        let base_dir = if let Ok(custom) = std::env::var("SNAPKEEP_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SnapkeepPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/snapkeep/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the spool directory used to stage exports before upload
    pub fn spool_dir(&self) -> PathBuf {
        self.base_dir.join("spool")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SnapkeepError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SnapkeepError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.spool_dir())
            .map_err(|e| SnapkeepError::Io(format!("Failed to create spool directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SnapkeepError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("snapkeep"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SnapkeepError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SnapkeepError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("snapkeep"))
}
