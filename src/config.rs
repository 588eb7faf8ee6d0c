//! Runtime configuration.
//!
//! Defaults reproduce the reference game. A JSON file named by
//! `BATTLE_ARENA_CONFIG` may override any field, and `BATTLE_ARENA_SAVE`
//! overrides the save path on top of that.

use combat::{Entity, Roster, default_roster};
use error::GameError;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const CONFIG_ENV_VAR: &str = "BATTLE_ARENA_CONFIG";
pub const SAVE_ENV_VAR: &str = "BATTLE_ARENA_SAVE";

const DEFAULT_SAVE_PATH: &str = "battle_arena.sav";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub save_path: PathBuf,
    /// Clear the terminal between scenes and pause after battle turns.
    pub clear_screen: bool,
    /// Enemies in the order they are fought.
    pub roster: Vec<Entity>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            clear_screen: true,
            roster: default_roster(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, GameError> {
        let config_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let save_path = std::env::var_os(SAVE_ENV_VAR).map(PathBuf::from);
        Self::from_sources(config_path.as_deref(), save_path)
    }

    pub fn from_sources(
        config_path: Option<&Path>,
        save_path: Option<PathBuf>,
    ) -> Result<Self, GameError> {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(save_path) = save_path {
            config.save_path = save_path;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, GameError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.roster.is_empty() {
            return Err(GameError::Config("roster must name at least one enemy".into()));
        }
        if let Some(enemy) = self.roster.iter().find(|enemy| !enemy.is_finite()) {
            return Err(GameError::Config(format!(
                "enemy {:?} has non-finite stats",
                enemy.name
            )));
        }
        if self.save_path.as_os_str().is_empty() {
            return Err(GameError::Config("save_path must not be empty".into()));
        }
        Ok(())
    }

    /// A fresh roster with the cursor on the first enemy.
    pub fn new_roster(&self) -> Roster {
        Roster::new(self.roster.clone())
    }
}
