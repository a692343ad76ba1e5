use hanja_engine::{TouchConfig, TypewriterConfig};
use serde::Deserialize;

use crate::village::{InvalidVillage, VillageConfig};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Village(#[from] InvalidVillage),
}

/// Tunables for the whole game. Any field missing from a JSON document keeps
/// its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub typewriter: TypewriterConfig,
    pub village: VillageConfig,
    pub touch: TouchConfig,
}

impl GameSettings {
    /// Parse and check a settings document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.village.validate()?;
        Ok(())
    }
}
