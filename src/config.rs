use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::config::MAX_TIME_LIMIT_SECS;
use crate::session::trainer::DEFAULT_SEQUENCE_LENGTH;
use crate::ui::theme::DEFAULT_THEME;

/// Startup defaults. The time limit and lives only seed the start-menu fields;
/// what the player submits there is what a session uses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_time_limit")]
    pub default_time_limit: f64,
    #[serde(default = "default_lives")]
    pub default_lives: u32,
    #[serde(default = "default_sequence_length")]
    pub sequence_length: usize,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_time_limit() -> f64 {
    3.0
}
fn default_lives() -> u32 {
    3
}
fn default_sequence_length() -> usize {
    DEFAULT_SEQUENCE_LENGTH
}
fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}
fn default_fps() -> u32 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_time_limit: default_time_limit(),
            default_lives: default_lives(),
            sequence_length: default_sequence_length(),
            theme: default_theme(),
            fps: default_fps(),
        }
    }
}

impl Config {
    /// Reads the user config if there is one. Missing is fine, malformed is not.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.normalize();
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("squaredr")
            .join("config.toml")
    }

    /// Replaces out-of-range values with something playable.
    pub fn normalize(&mut self) {
        let time = self.default_time_limit;
        if !(time.is_finite() && time > 0.0 && time <= MAX_TIME_LIMIT_SECS) {
            self.default_time_limit = default_time_limit();
        }
        if self.default_lives == 0 {
            self.default_lives = default_lives();
        }
        self.sequence_length = self.sequence_length.max(1);
        self.fps = self.fps.clamp(1, 240);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.default_time_limit, 3.0);
        assert_eq!(config.default_lives, 3);
        assert_eq!(config.sequence_length, 10);
        assert_eq!(config.theme, "classic");
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("default_lives = 5\ntheme = \"green\"").unwrap();
        assert_eq!(config.default_lives, 5);
        assert_eq!(config.theme, "green");
        assert_eq!(config.default_time_limit, 3.0);
    }

    #[test]
    fn normalize_repairs_bad_values() {
        let mut config = Config {
            default_time_limit: -1.0,
            default_lives: 0,
            sequence_length: 0,
            theme: "classic".to_string(),
            fps: 10_000,
        };
        config.normalize();
        assert_eq!(config.default_time_limit, 3.0);
        assert_eq!(config.default_lives, 3);
        assert_eq!(config.sequence_length, 1);
        assert_eq!(config.fps, 240);

        let mut config = Config {
            default_time_limit: 1e19,
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.default_time_limit, 3.0);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.sequence_length, 10);
    }

    #[test]
    fn file_is_read_and_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_time_limit = 1.5\nfps = 0\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_time_limit, 1.5);
        assert_eq!(config.fps, 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_lives = \"many\"").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
