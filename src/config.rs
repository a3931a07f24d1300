//! Editor preferences
//!
//! A small RON file under the platform config directory: grid overlay
//! default and the directory the file dialogs start in. A missing or
//! unparsable file silently falls back to defaults - preferences are
//! never worth refusing to start over.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_enabled: bool,
    pub last_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_enabled: true,
            last_dir: None,
        }
    }
}

/// Error type for saving preferences
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Serialize(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl EditorConfig {
    /// Load preferences, or defaults when there are none yet
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Persist preferences. A no-op on platforms without a config dir.
    pub fn save(&self) -> Result<(), ConfigError> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("blockforge").join("config.ron"))
    }

    #[cfg(target_arch = "wasm32")]
    fn config_path() -> Option<PathBuf> {
        None
    }

    fn load_from(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(_) => return Self::default(),
        };
        match ron::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, data)?;
        Ok(())
    }
}
