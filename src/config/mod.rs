use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_top_places")]
    pub top_places: usize,
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    #[serde(default = "default_bar_char")]
    pub bar_char: String,
    #[serde(default)]
    pub enforce_unique_ids: bool,
}

fn default_top_places() -> usize {
    3
}
fn default_preview_width() -> usize {
    60
}
fn default_wrap_width() -> usize {
    72
}
fn default_bar_width() -> usize {
    30
}
fn default_bar_char() -> String {
    "█".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_places: default_top_places(),
            preview_width: default_preview_width(),
            wrap_width: default_wrap_width(),
            bar_width: default_bar_width(),
            bar_char: default_bar_char(),
            enforce_unique_ids: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("exprimetoncampus")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".exprimetoncampus")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("exprimetoncampus.conf")
    }

    /// Load configuration from `path` (or the default file).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = Config::from_yaml("top_places: 5\nenforce_unique_ids: true\n").unwrap();
        assert_eq!(cfg.top_places, 5);
        assert!(cfg.enforce_unique_ids);
        assert_eq!(cfg.preview_width, 60);
        assert_eq!(cfg.bar_char, "█");
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config {
            top_places: 1,
            ..Config::default()
        };
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn bad_yaml_is_an_error() {
        assert!(Config::from_yaml("top_places: beaucoup").is_err());
    }
}
