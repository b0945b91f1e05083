//! Configuration for the datapath command-line tool.
//!
//! Settings are read from `~/.config/datapath/config.toml`. Every field has a
//! default, so the file may be partial or absent. Command-line flags override
//! whatever is loaded here.
//!
//! # Example
//!
//! ```
//! use datapath::config::{Config, OutputFormat};
//!
//! let config = Config::default();
//! assert_eq!(config.output_format, OutputFormat::Json);
//! assert!(config.check_type);
//!
//! let custom: Config = toml::from_str("output_format = \"yaml\"").unwrap();
//! assert_eq!(custom.output_format, OutputFormat::Yaml);
//! assert!(custom.pretty);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How resolved values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Configuration for the datapath tool.
///
/// # Fields
///
/// * `output_format` - Output serialization, "json" or "yaml" (default: "json")
/// * `pretty` - Pretty-print JSON output (default: true)
/// * `check_type` - Assert `--type`/`--optional` on resolved values (default: true)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output_format: OutputFormat,

    #[serde(default = "default_pretty")]
    pub pretty: bool,

    #[serde(default = "default_check_type")]
    pub check_type: bool,
}

fn default_pretty() -> bool {
    true
}

fn default_check_type() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            pretty: default_pretty(),
            check_type: default_check_type(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/datapath/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("datapath");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read; problems other than a missing file are logged.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("ignoring malformed config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                log::warn!("could not read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
