//! Configuration types for runlog.
//!
//! [`Config::load`] reads `~/.config/runlog/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::error::{ConfigError, StoreError};
use crate::location::{LogLocation, Locations};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[store]
banner = "NeuroGames Project - Program Execution Log"

[[store.locations]]
name = "current"
path = "logs/program_log.txt"
role = "primary"

[[store.locations]]
name = "root"
path = "program_log.txt"
role = "legacy"

[[store.locations]]
name = "sub"
path = "sub/program_log.txt"
role = "legacy"

[report]
top_sources = 5
show_paths  = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/runlog/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[store]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_banner")]
    pub banner: String,
    /// Relative location paths resolve against this directory. When unset
    /// they resolve against the working directory.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    pub locations: Vec<LogLocation>,
}

fn default_banner() -> String { "NeuroGames Project - Program Execution Log".to_string() }

impl StoreConfig {
    /// Validate the location list.
    pub fn locations(&self) -> Result<Locations, StoreError> {
        Locations::new(self.locations.iter().cloned(), self.base_dir.as_deref())
    }
}

/// `[report]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top_sources")]
    pub top_sources: usize,
    #[serde(default)]
    pub show_paths: bool,
}

fn default_top_sources() -> usize { 5 }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_sources: default_top_sources(),
            show_paths: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/runlog/config.toml`. Creates the file with
    /// defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();

        if !path.exists() {
            let io_err = |source| ConfigError::Io {
                path: path.clone(),
                source,
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start()).map_err(io_err)?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file. Missing sections fall back to defaults;
    /// a file without `[[store.locations]]` uses the default location list.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(raw.resolve())
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Defaults with every location path resolved under `base_dir`.
    pub fn rooted_at(base_dir: impl Into<PathBuf>) -> Self {
        let mut cfg = Self::defaults();
        cfg.store.base_dir = Some(base_dir.into());
        cfg
    }
}

// Arrays are not merged across config sources, so a user file is read on its
// own and gaps are filled from the defaults here.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    store: RawStore,
    #[serde(default)]
    report: ReportConfig,
}

#[derive(Debug, Default, Deserialize)]
struct RawStore {
    banner: Option<String>,
    base_dir: Option<PathBuf>,
    locations: Option<Vec<LogLocation>>,
}

impl RawConfig {
    fn resolve(self) -> Config {
        let defaults = Config::defaults();
        Config {
            store: StoreConfig {
                banner: self.store.banner.unwrap_or(defaults.store.banner),
                base_dir: self.store.base_dir,
                locations: self.store.locations.unwrap_or(defaults.store.locations),
            },
            report: self.report,
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("runlog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
