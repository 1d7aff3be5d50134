//! Configuration loading from mergebench.toml
//!
//! Optional configuration file discovered by walking up from the current
//! directory. CLI flags override file values; file values override the
//! built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mergebench configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MergebenchConfig {
    /// Input table locations.
    #[serde(default)]
    pub inputs: InputsConfig,
    /// Chart output settings.
    #[serde(default)]
    pub charts: ChartsConfig,
}

/// Where the two result tables live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    /// Directory containing the result tables.
    #[serde(default = "default_results_dir")]
    pub directory: String,
    /// File name of the per-file merge evaluation table.
    #[serde(default = "default_evaluations_file")]
    pub evaluations_file: String,
    /// File name of the running-time table.
    #[serde(default = "default_running_times_file")]
    pub running_times_file: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            directory: default_results_dir(),
            evaluations_file: default_evaluations_file(),
            running_times_file: default_running_times_file(),
        }
    }
}

fn default_results_dir() -> String {
    "results".to_string()
}
fn default_evaluations_file() -> String {
    "file_merge_evaluations.csv".to_string()
}
fn default_running_times_file() -> String {
    "running_times.csv".to_string()
}

/// Chart output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Directory charts are written to.
    #[serde(default = "default_chart_dir")]
    pub directory: String,
    /// Chart width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            directory: default_chart_dir(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_chart_dir() -> String {
    "target/mergebench".to_string()
}
fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    720
}

impl MergebenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover and load configuration by walking up from the current
    /// directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("mergebench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}
