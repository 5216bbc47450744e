use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::fixtures::literals::{string_ids, time_index};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub fixtures: FixtureSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FixtureSettings {
    /// First day of the time-indexed sample, `YYYY-MM-DD`
    pub time_index_start: String,
    pub string_id_prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: String,
}

impl Settings {
    /// Defaults, then `config/series_fixtures.*`, then `SERIES_FIXTURES__*` variables
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Self::environment())
    }

    /// Built-in defaults only, ignoring files and the environment
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("config/series_fixtures").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix("SERIES_FIXTURES").separator("__")
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("fixtures.time_index_start", time_index::START)?
            .set_default("fixtures.string_id_prefix", string_ids::PREFIX)?
            .set_default("logging.level", "info")
    }
}
