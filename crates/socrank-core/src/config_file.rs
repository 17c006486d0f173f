use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::eligibility::{EligibilityConfig, VolumeMatch, YearRange};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub years: Option<YearsConfig>,
    pub volumes: Option<VolumesConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearsConfig {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumesConfig {
    /// `"strict"` or `"legacy"`.
    pub match_mode: Option<String>,
}

/// Platform config directory path: `<config_dir>/socrank/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("socrank").join("config.toml"))
}

/// Load config by cascading CWD `.socrank.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".socrank.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        years: Some(YearsConfig {
            start: overlay
                .years
                .as_ref()
                .and_then(|y| y.start)
                .or_else(|| base.years.as_ref().and_then(|y| y.start)),
            end: overlay
                .years
                .as_ref()
                .and_then(|y| y.end)
                .or_else(|| base.years.as_ref().and_then(|y| y.end)),
        }),
        volumes: Some(VolumesConfig {
            match_mode: overlay
                .volumes
                .as_ref()
                .and_then(|v| v.match_mode.clone())
                .or_else(|| base.volumes.as_ref().and_then(|v| v.match_mode.clone())),
        }),
    }
}

/// Save the current config to the platform config directory.
pub fn save_config(config: &ConfigFile) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to_path(config, &path)?;
    Ok(path)
}

/// Write `config` as TOML to `path`, creating parent directories.
pub fn save_to_path(config: &ConfigFile, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

impl EligibilityConfig {
    /// Resolve a config file against the built-in defaults.
    pub fn from_file(file: &ConfigFile) -> Result<Self, ConfigError> {
        let defaults = YearRange::default();
        let years = YearRange {
            start: file
                .years
                .as_ref()
                .and_then(|y| y.start)
                .unwrap_or(defaults.start),
            end: file
                .years
                .as_ref()
                .and_then(|y| y.end)
                .unwrap_or(defaults.end),
        };
        if years.start > years.end {
            return Err(ConfigError::InvalidYearRange {
                start: years.start,
                end: years.end,
            });
        }

        let volume_match = match file.volumes.as_ref().and_then(|v| v.match_mode.as_deref()) {
            Some(mode) => mode.parse::<VolumeMatch>()?,
            None => VolumeMatch::default(),
        };

        Ok(Self {
            years,
            volume_match,
        })
    }
}
