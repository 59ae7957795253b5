use crate::error::ScoringError;
use crate::models::{Dimension, WeightTable};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_major_weight")]
    pub location: u32,
    #[serde(default = "default_major_weight")]
    pub salary: u32,
    #[serde(default = "default_minor_weight")]
    pub skills: u32,
    #[serde(default = "default_minor_weight")]
    pub experience: u32,
    #[serde(default = "default_minor_weight")]
    pub wfh: u32,
    #[serde(default = "default_minor_weight")]
    pub sector: u32,
    #[serde(default = "default_minor_weight")]
    pub area: u32,
    #[serde(default = "default_major_weight")]
    pub expertise: u32,
    #[serde(default = "default_minor_weight")]
    pub last_move: u32,
    #[serde(default = "default_major_weight")]
    pub move_status: u32,
}

impl WeightsConfig {
    /// Convert into a validated weight table, rejecting zero weights.
    pub fn to_table(&self) -> Result<WeightTable, ScoringError> {
        WeightTable::new(BTreeMap::from([
            (Dimension::Location, self.location),
            (Dimension::Salary, self.salary),
            (Dimension::Skills, self.skills),
            (Dimension::Experience, self.experience),
            (Dimension::Wfh, self.wfh),
            (Dimension::Sector, self.sector),
            (Dimension::Area, self.area),
            (Dimension::Expertise, self.expertise),
            (Dimension::LastMove, self.last_move),
            (Dimension::MoveStatus, self.move_status),
        ]))
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_major_weight(),
            salary: default_major_weight(),
            skills: default_minor_weight(),
            experience: default_minor_weight(),
            wfh: default_minor_weight(),
            sector: default_minor_weight(),
            area: default_minor_weight(),
            expertise: default_major_weight(),
            last_move: default_minor_weight(),
            move_status: default_major_weight(),
        }
    }
}

fn default_major_weight() -> u32 { 5 }
fn default_minor_weight() -> u32 { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
        }
    }
}

fn default_result_limit() -> usize { 25 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PROSPECT__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. PROSPECT__SCORING__WEIGHTS__SALARY -> scoring.weights.salary
            .add_source(
                Environment::with_prefix("PROSPECT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PROSPECT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
