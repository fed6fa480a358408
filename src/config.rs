use std::path::Path;

use crate::ai::SkillLevel;
use crate::error::ConfigError;
use crate::game::Colour;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "shiftago.toml";

/// Application settings consumed by the presentation shell: the colour the
/// human prefers to play, the AI opponent's skill, and the log filter
/// installed at startup. Loaded from TOML; absent keys keep their defaults.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub preferred_colour: Colour,
    pub skill_level: SkillLevel,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            preferred_colour: Colour::Blue,
            skill_level: SkillLevel::Advanced,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file is not an error: the
    /// defaults apply and a warning is logged.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log_filter must not be empty".into(),
            ));
        }
        Ok(())
    }
}
