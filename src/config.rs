// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, CONFIG_VERSION};
use crate::errors::{AppError, AppResult};
use crate::media::PixelEncoding;
use crate::selection::{EncodingPreferenceList, TargetPlatform};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persisted user overrides
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema version
    pub version: u32,
    /// Platform whose defaults apply (None = the compile target)
    pub platform: Option<TargetPlatform>,
    /// Preference overrides per platform
    pub preferred_encodings: HashMap<TargetPlatform, Vec<PixelEncoding>>,
    /// Last capture device configured
    pub last_device_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            platform: None,
            preferred_encodings: HashMap::new(),
            last_device_path: None,
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/viewfinder/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::Config(format!("{}: {}", path.display(), e)));
            }
        };

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        if config.version > CONFIG_VERSION {
            return Err(AppError::Config(format!(
                "{}: config version {} is newer than supported version {}",
                path.display(),
                config.version,
                CONFIG_VERSION
            )));
        }

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load from the default location (defaults if there is none)
    pub fn load() -> AppResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Write as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Write to the default location
    pub fn save(&self) -> AppResult<()> {
        let path = Self::default_path()
            .ok_or_else(|| AppError::Config("No config directory available".to_string()))?;
        self.save_to(&path)
    }

    /// Platform whose preferences apply
    pub fn effective_platform(&self) -> TargetPlatform {
        self.platform.unwrap_or_else(TargetPlatform::current)
    }

    /// Preferences for `platform`: the user override if set, else the platform default
    pub fn preferences_for(&self, platform: TargetPlatform) -> EncodingPreferenceList {
        match self.preferred_encodings.get(&platform) {
            Some(encodings) => EncodingPreferenceList::new(encodings.iter().copied()),
            None => platform.default_preferences(),
        }
    }

    /// Preferences for the effective platform
    pub fn effective_preferences(&self) -> EncodingPreferenceList {
        self.preferences_for(self.effective_platform())
    }

    /// Resolve command-line choices against the config
    ///
    /// Explicit `encodings` win outright. Otherwise the list for `platform`
    /// (or the configured/compile-target platform) is used, with the user's
    /// per-platform override taking precedence over the built-in default.
    pub fn resolve_preferences(
        &self,
        platform: Option<TargetPlatform>,
        encodings: &[PixelEncoding],
    ) -> (TargetPlatform, EncodingPreferenceList) {
        let platform = platform.unwrap_or_else(|| self.effective_platform());
        let preferred = if encodings.is_empty() {
            self.preferences_for(platform)
        } else {
            EncodingPreferenceList::new(encodings.iter().copied())
        };
        (platform, preferred)
    }
}
