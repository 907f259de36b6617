use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::roi::RoiInputs;

pub const DEFAULT_PRESET: &str = "light";

#[derive(Error, Debug, PartialEq)]
pub enum PresetError {
    #[error("unknown preset '{name}' (available: {available})")]
    Unknown { name: String, available: String },
}

/// A named bundle of default inputs for a typical customer scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(flatten)]
    pub inputs: RoiInputs,
}

impl Preset {
    pub fn new(name: &str, inputs: RoiInputs) -> Self {
        Self {
            name: name.to_string(),
            inputs,
        }
    }
}

/// Ordered preset lookup. Insertion order is the listing order.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTable {
    presets: Vec<Preset>,
}

impl PresetTable {
    pub fn builtin() -> Self {
        Self {
            presets: vec![
                Preset::new(DEFAULT_PRESET, RoiInputs::default()),
                Preset::new(
                    "manufacturing",
                    RoiInputs {
                        team_size: 25,
                        hourly_rate: 55.0,
                        hours_saved_per_week: 4.0,
                        adoption: 0.6,
                    },
                ),
                Preset::new(
                    "configurators",
                    RoiInputs {
                        team_size: 10,
                        hourly_rate: 85.0,
                        hours_saved_per_week: 6.0,
                        adoption: 0.8,
                    },
                ),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    pub fn resolve(&self, name: &str) -> Result<&Preset, PresetError> {
        self.get(name).ok_or_else(|| PresetError::Unknown {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// Replaces a preset with the same name in place, otherwise appends.
    pub fn upsert(&mut self, preset: Preset) {
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }
}
