pub mod check;
pub mod rules;

use anyhow::Result;
use rusty_forms_validator::Config;
use std::path::Path;

/// Load the given config file, which must exist, or ./rusty-forms.toml
/// (defaults when absent) if none was given
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
}
