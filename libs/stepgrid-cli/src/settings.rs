//! Optional TOML settings file.
//!
//! ```toml
//! [export]
//! scale = [5.0, 5.0, 10.0]
//! offset = [-30.0, -30.0, 0.2]
//! solid_name = "StepGrid"
//!
//! [generator]
//! columns = 12
//! rows = 12
//! border = 1
//! border_value = 0.0
//! min_value = 1.0
//! max_value = 5.0
//! base = -0.2
//! ```
//!
//! Every key is optional and falls back to the `config` crate defaults.

use anyhow::{Context, Result};
use config::constants::{ExportConfig, GeneratorConfig};
use serde::Deserialize;
use std::path::Path;

/// Root of the settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

/// `[export]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportSettings {
    pub scale: Option<[f64; 3]>,
    pub offset: Option<[f64; 3]>,
    pub solid_name: Option<String>,
}

/// `[generator]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    pub columns: Option<usize>,
    pub rows: Option<usize>,
    pub border: Option<usize>,
    pub border_value: Option<f64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub base: Option<f64>,
}

impl Settings {
    /// Loads settings from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid settings file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings TOML")
    }

    pub fn export_config(&self) -> Result<ExportConfig> {
        let defaults = ExportConfig::default();
        let export = &self.export;
        ExportConfig::new(
            export.scale.unwrap_or(defaults.scale),
            export.offset.unwrap_or(defaults.offset),
            export.solid_name.clone().unwrap_or(defaults.solid_name),
        )
        .context("Invalid [export] settings")
    }

    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        let defaults = GeneratorConfig::default();
        let generator = &self.generator;
        GeneratorConfig::new(
            generator.columns.unwrap_or(defaults.columns),
            generator.rows.unwrap_or(defaults.rows),
            generator.border.unwrap_or(defaults.border),
            generator.border_value.unwrap_or(defaults.border_value),
            generator.min_value.unwrap_or(defaults.min_value),
            generator.max_value.unwrap_or(defaults.max_value),
            generator.base.unwrap_or(defaults.base),
        )
        .context("Invalid [generator] settings")
    }
}
