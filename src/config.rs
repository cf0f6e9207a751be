use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;
use crate::scip::{DEFAULT_INDEX_FILE, MAX_PARENT_SEARCH};
use crate::symbol::index::default_declaration_extensions;
use crate::symbol::{DeclarationConvention, DeclarationExtension};

const CONFIG_DIR: &str = ".scip-finder";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Index discovery and construction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// File name searched for when `--scip` is not given
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Directories checked walking up from the working directory
    #[serde(default = "default_max_parent_search")]
    pub max_parent_search: usize,

    /// Declaration-file suffixes folded onto their implementation files
    #[serde(default = "default_declaration_extensions")]
    pub declaration_extensions: Vec<DeclarationExtension>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            max_parent_search: default_max_parent_search(),
            declaration_extensions: default_declaration_extensions(),
        }
    }
}

impl IndexConfig {
    pub fn declaration_convention(&self) -> DeclarationConvention {
        DeclarationConvention::new(self.declaration_extensions.clone())
    }
}

fn default_file_name() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

fn default_max_parent_search() -> usize {
    MAX_PARENT_SEARCH
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write logs to rotating files under `directory`
    #[serde(default)]
    pub enabled: bool,

    /// Write logs to stderr (filtered by `RUST_LOG`, `warn` otherwise)
    #[serde(default = "default_true")]
    pub stderr: bool,

    /// File log level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log directory, relative paths resolve against the working directory
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,

    /// File rotation: minutely, hourly, daily or never
    #[serde(default = "default_rotation")]
    pub rotation: String,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            stderr: default_true(),
            level: default_log_level(),
            directory: default_log_directory(),
            rotation: default_rotation(),
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from(CONFIG_DIR).join("logs")
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn default_file_prefix() -> String {
    "scip-finder.log".to_string()
}

impl Config {
    /// Load configuration from the .scip-finder directory
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;

            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {:?}", config_path))
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to the .scip-finder directory
    pub fn save(&self, root: &Path) -> Result<()> {
        let config_dir = Self::config_dir(root);
        let config_path = config_dir.join(CONFIG_FILE);

        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory {:?}", config_dir))?;

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    pub fn config_dir(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR)
    }
}
