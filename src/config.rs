//! Run settings shared with the downstream figure and report scripts.
//!
//! The conversion itself never reads these values; they are loaded so a bad
//! settings file fails the run early and so the run summary records them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PARALLEL_CHAINS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output_figure: bool,
    pub output_report: bool,
    pub parallel_chains: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_figure: false,
            output_report: false,
            parallel_chains: DEFAULT_PARALLEL_CHAINS,
        }
    }
}

impl Settings {
    /// Loads a JSON settings file. Unknown keys are ignored and missing keys
    /// keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(content)?;
        Ok(settings)
    }
}
