use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use textmarked_engine::{EditorOptions, OptionsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid editor options in {config_path}: {source}")]
    InvalidOptions {
        config_path: PathBuf,
        source: OptionsError,
    },
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorOptions,
}

impl Config {
    /// Load and validate the editor options at `config_path`.
    ///
    /// `~` and `$VARS` in the path are expanded. A missing file is `Ok(None)`,
    /// so hosts can fall back to [`EditorOptions::default`].
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = expand_path(config_path.as_ref());
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

        config
            .editor
            .validate()
            .map_err(|source| ConfigError::InvalidOptions {
                config_path: config_path.clone(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Load from [`Config::default_path`]
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::default_path())
    }

    /// Write the options back as TOML, creating parent directories.
    ///
    /// Invalid options are refused so the file always loads again.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        self.editor.validate()?;

        let config_path = expand_path(config_path.as_ref());
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// `~/.config/textmarked/config.toml`
    pub fn default_path() -> PathBuf {
        expand_path(Path::new("~/.config/textmarked/config.toml"))
    }
}

/// Expand `~` and `$VARS`, leaving the path as given when a variable is unset.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
