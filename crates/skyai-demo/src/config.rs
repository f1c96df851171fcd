// File: crates/skyai-demo/src/config.rs
// Summary: Demo configuration (skyai.toml): output paths, chart size, fixture seed and metric selection.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skyai_chart::types::{HEIGHT, WIDTH};
use skyai_chart::Dimensions;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "skyai.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Where rendered cards are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// JSON file holding the persisted theme preference
    #[serde(default = "default_theme_store")]
    pub theme_store: PathBuf,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Seed for generated history
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Metric keys to render; empty means every preset
    #[serde(default)]
    pub metrics: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("target/out")
}

fn default_theme_store() -> PathBuf {
    PathBuf::from("target/skyai-prefs.json")
}

fn default_width() -> f64 {
    WIDTH
}

fn default_height() -> f64 {
    HEIGHT
}

fn default_seed() -> u64 {
    42
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            theme_store: default_theme_store(),
            width: default_width(),
            height: default_height(),
            seed: default_seed(),
            metrics: Vec::new(),
        }
    }
}

impl DemoConfig {
    /// Load `explicit` if given (it must exist), else `skyai.toml` if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = DemoConfig::from_toml("").unwrap();
        assert_eq!(cfg, DemoConfig::default());
        assert_eq!(cfg.dimensions(), Dimensions::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = DemoConfig::from_toml(
            r#"
            width = 420.0
            seed = 7
            metrics = ["temp", "co2"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.width, 420.0);
        assert_eq!(cfg.height, 180.0);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.metrics, ["temp", "co2"]);
        assert_eq!(cfg.output_dir, PathBuf::from("target/out"));
    }

    #[test]
    fn serializes_back_to_toml() {
        let text = DemoConfig::default().to_toml().unwrap();
        assert_eq!(DemoConfig::from_toml(&text).unwrap(), DemoConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(DemoConfig::load(Some(Path::new("target/does-not-exist/skyai.toml"))).is_err());
    }
}
