//! Runtime configuration read from the environment.
use std::env;
use std::path::PathBuf;

use game_content::{Catalog, ConfigLoader, ContentFactory};
use game_core::GameConfig;

use crate::error::{Result, RuntimeError};
use crate::scenario::Scenario;

/// Where the battle layout comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScenarioSource {
    /// One of the built-in presets.
    Preset(String),
    /// A RON file on disk.
    File(PathBuf),
}

impl ScenarioSource {
    /// Treats values that look like paths as files and everything else as a
    /// preset name.
    pub fn parse(value: &str) -> Self {
        if value.ends_with(".ron") || value.contains(std::path::MAIN_SEPARATOR) {
            Self::File(PathBuf::from(value))
        } else {
            Self::Preset(value.to_string())
        }
    }

    pub fn load(&self) -> Result<Scenario> {
        match self {
            Self::Preset(name) => Scenario::preset(name),
            Self::File(path) => Scenario::load_from_file(path),
        }
    }
}

impl Default for ScenarioSource {
    fn default() -> Self {
        Self::Preset(Scenario::DEFAULT_PRESET.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub scenario: ScenarioSource,
    /// TOML rules file; built-in rules when unset.
    pub game_config_path: Option<PathBuf>,
    /// Directory with `units.ron` and `skills.ron`; built-in catalog when unset.
    pub data_dir: Option<PathBuf>,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            scenario: ScenarioSource::default(),
            game_config_path: None,
            data_dir: None,
            event_buffer_size: 100,
        }
    }
}

impl RuntimeConfig {
    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_SCENARIO` - Preset name or path to a scenario RON file (default: basic)
    /// - `SKIRMISH_CONFIG` - Path to a game rules TOML file
    /// - `SKIRMISH_DATA_DIR` - Directory holding `units.ron` and `skills.ron`
    /// - `SKIRMISH_EVENT_CAPACITY` - Event bus capacity per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(scenario) = read_env::<String>("SKIRMISH_SCENARIO") {
            config.scenario = ScenarioSource::parse(&scenario);
        }
        if let Some(path) = read_env::<PathBuf>("SKIRMISH_CONFIG") {
            config.game_config_path = Some(path);
        }
        if let Some(dir) = read_env::<PathBuf>("SKIRMISH_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(capacity) = read_env::<usize>("SKIRMISH_EVENT_CAPACITY") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    pub fn load_game_config(&self) -> Result<GameConfig> {
        match &self.game_config_path {
            Some(path) => ConfigLoader::load(path).map_err(content_error),
            None => ConfigLoader::builtin().map_err(content_error),
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.data_dir {
            Some(dir) => ContentFactory::new(dir).load_catalog().map_err(content_error),
            None => Catalog::builtin().map_err(content_error),
        }
    }
}

fn content_error(error: impl std::fmt::Display) -> RuntimeError {
    RuntimeError::Content(error.to_string())
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
