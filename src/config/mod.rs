use crate::errors::{AppError, AppResult};
use crate::models::{PriceSweep, TradeoffParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub params: TradeoffParams,
    #[serde(default)]
    pub sweep: PriceSweep,
}

fn default_currency() -> String {
    "SEK".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            params: TradeoffParams::default(),
            sweep: PriceSweep::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rtradeoff`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtradeoff")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtradeoff.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }

    /// Write the default configuration to `path` (or the default location).
    /// An existing file is kept unless `force` is set.
    pub fn init(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
