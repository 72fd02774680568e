//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--api-url`, `--no-color`; applied in `main`)
//! 2. Environment variables (`INNKEEP__API__BASE_URL`, ...; `.env` is loaded first)
//! 3. Config file (`--config FILE` or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hotel API settings.
    pub api: ApiConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout; `0` disables it.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000/api".into(),
                timeout_secs: 30,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

/// Keys accepted by `config get` / `config set`.
pub const KNOWN_KEYS: &[&str] = &[
    "api.base_url",
    "api.timeout_secs",
    "output.no_color",
    "output.format",
];

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// A file passed explicitly via `--config` must exist; the default file
    /// is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);
        let defaults = Self::default();

        config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_secs", defaults.api.timeout_secs)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                config::Environment::with_prefix("INNKEEP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// The file `load` reads and `config set` / `init` write.
    pub fn resolve_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.innkeep.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "innkeep", "innkeep")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".innkeep.toml"))
    }

    /// Request timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.api.timeout_secs > 0).then(|| Duration::from_secs(self.api.timeout_secs))
    }

    /// Value of a dotted key as displayed by `config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.base_url" => Some(self.api.base_url.clone()),
            "api.timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }
}

/// Write `key = value` into the TOML file at `path`, keeping other entries.
///
/// The value is parsed according to the key's type.
pub fn persist_value(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let typed = match key {
        "api.base_url" | "output.format" => toml::Value::String(value.to_owned()),
        "api.timeout_secs" => {
            let secs: i64 = value
                .parse()
                .ok()
                .filter(|secs| *secs >= 0)
                .with_context(|| format!("'{value}' is not a number of seconds"))?;
            toml::Value::Integer(secs)
        }
        "output.no_color" => toml::Value::Boolean(
            value
                .parse()
                .with_context(|| format!("'{value}' is not true or false"))?,
        ),
        _ => anyhow::bail!("Unknown config key: '{key}'"),
    };

    let mut document: toml::Table = if path.exists() {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("{} is not valid TOML", path.display()))?
    } else {
        toml::Table::new()
    };

    // KNOWN_KEYS are all `section.field`.
    let (section, field) = key
        .split_once('.')
        .with_context(|| format!("Unknown config key: '{key}'"))?;
    let table = document
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()))
        .as_table_mut()
        .with_context(|| format!("'{section}' in {} is not a table", path.display()))?;
    table.insert(field.to_owned(), typed);

    write_file(path, &toml::to_string_pretty(&document)?)
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to '{}'", path.display()))
}
