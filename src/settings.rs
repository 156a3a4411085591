use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::render::DEFAULT_MAX_PER_CATEGORY;

pub const DEFAULT_BASE_URL: &str = "https://docs.developer.apple.com/tutorials/data/documentation/";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root every skill directory is written under.
    pub output_dir: PathBuf,
    pub base_url: String,
    pub max_apis_per_category: usize,
    /// Snippet library JSON; the built-in library is used when unset.
    pub library: Option<PathBuf>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_apis_per_category: DEFAULT_MAX_PER_CATEGORY,
            library: None,
            timeout_secs: 30,
            user_agent: concat!("skillgen/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Defaults, then `skillgen.toml` in the working directory, then `file`,
/// then `SKILLGEN_*` environment variables.
pub fn load(file: Option<&Path>) -> Result<Settings> {
    let mut builder = Config::builder().add_source(File::with_name("skillgen").required(false));
    if let Some(path) = file {
        builder = builder.add_source(File::from(path));
    }

    builder
        .add_source(Environment::with_prefix("SKILLGEN").try_parsing(true))
        .build()
        .context("Failed to load settings")?
        .try_deserialize()
        .context("Invalid settings")
}
