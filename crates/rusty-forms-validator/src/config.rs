// File: src/config.rs
// Purpose: Configuration parsing from rusty-forms.toml

use crate::application::RuleApplication;
use crate::layout::LayoutValidations;
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "rusty-forms.toml";

/// Validator configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,

    /// Rule name -> replacement message template
    #[serde(default)]
    pub messages: IndexMap<String, String>,

    /// Field name -> rules to queue, in document order
    #[serde(default)]
    pub validations: IndexMap<String, LayoutValidations>,
}

/// Settings for running pending validations
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RunConfig {
    /// Empty the queue after a run
    #[serde(default)]
    pub clear_after: bool,
}

impl Config {
    /// Load configuration from a TOML file that must exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./rusty-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(CONFIG_FILE)
    }

    /// Like [`load`](Self::load), but a missing file gives the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(path)
    }

    /// Parse configuration from TOML text. Blank text gives the defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Declared validations lowered to rule applications
    pub fn rule_applications(&self) -> crate::Result<Vec<(String, RuleApplication)>> {
        self.validations
            .iter()
            .map(|(field, rules)| Ok((field.clone(), rules.to_application()?)))
            .collect()
    }
}
