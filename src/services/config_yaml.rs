use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::locale::Locale;
use crate::domain::preset::{DEFAULT_PRESET, Preset, PresetError, PresetTable};
use crate::domain::roi::RoiDraft;
use crate::services::validation::{ValidationError, validate};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("preset '{name}' in config is invalid: {source}")]
    InvalidPreset {
        name: String,
        source: ValidationError,
    },
    #[error("default preset in config: {0}")]
    DefaultPreset(#[from] PresetError),
}

/// Optional settings file.
///
/// ```yaml
/// locale: en
/// default_preset: logistics
/// presets:
///   - name: logistics
///     team_size: 12
///     hourly_rate: 70
///     hours_saved_per_week: 3
///     adoption: 0.65
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoiConfig {
    pub locale: Locale,
    pub default_preset: String,
    pub presets: Vec<Preset>,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_preset: DEFAULT_PRESET.to_string(),
            presets: Vec::new(),
        }
    }
}

impl RoiConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document means "all defaults".
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Built-in presets with the configured ones merged over them by name.
    ///
    /// # Errors
    /// - A configured preset whose inputs fail validation.
    /// - A `default_preset` that names no preset.
    pub fn preset_table(&self) -> Result<PresetTable, ConfigError> {
        let mut table = PresetTable::builtin();
        for preset in &self.presets {
            validate(&RoiDraft::from(preset.inputs)).map_err(|source| {
                ConfigError::InvalidPreset {
                    name: preset.name.clone(),
                    source,
                }
            })?;
            table.upsert(preset.clone());
        }
        table.resolve(&self.default_preset)?;
        Ok(table)
    }
}

pub fn load_config_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<RoiConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let config = RoiConfig::from_yaml_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded config from {} ({} preset(s))",
        path.display(),
        config.presets.len()
    );
    Ok(config)
}

/// Falls back to [`RoiConfig::default`] when no path is given.
pub fn load_config_if_provided(path: Option<&str>) -> Result<RoiConfig, ConfigError> {
    match path {
        Some(path) => load_config_from_yaml_file(path),
        None => Ok(RoiConfig::default()),
    }
}
