use thiserror::Error;

use crate::commands::base_commands::InputArgs;
use crate::domain::locale::Locale;
use crate::domain::preset::{PresetError, PresetTable};
use crate::services::config_yaml::{ConfigError, load_config_if_provided};
use crate::services::csv_export::ExportError;
use crate::services::session::RoiSession;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Preset(#[from] PresetError),
    /// Localized validation message.
    #[error("{0}")]
    Invalid(String),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("{0}")]
    Export(#[from] ExportError),
    #[error("failed to serialize output: {0}")]
    Serialize(String),
}

/// Settings every command runs with: config file merged with CLI flags.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub locale: Locale,
    pub presets: PresetTable,
    pub default_preset: String,
}

impl AppContext {
    pub fn load(config_path: Option<&str>, locale: Option<Locale>) -> Result<Self, CommandError> {
        let config = load_config_if_provided(config_path)?;
        let presets = config.preset_table()?;
        Ok(Self {
            locale: locale.unwrap_or(config.locale),
            presets,
            default_preset: config.default_preset,
        })
    }

    /// Starts from the requested preset (or the default one) and applies the
    /// explicit field flags over it.
    pub fn session(&self, input: &InputArgs) -> Result<RoiSession, PresetError> {
        let preset = input.preset.as_deref().unwrap_or(&self.default_preset);
        let mut session = RoiSession::from_preset(&self.presets, preset)?;
        session.apply(&input.draft());
        Ok(session)
    }
}
