use crate::model::CatalogPreset;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Which landing page design to mount at `/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandingStyle {
    /// Sign up / sign in controls only
    Minimal,
    /// Hero section with typed headline and the smart board link
    #[default]
    Hero,
}

/// Where the tutorial's gesture catalog comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Preset(CatalogPreset),
    /// JSON or YAML file, chosen by extension
    Path(PathBuf),
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::Preset(CatalogPreset::Board)
    }
}

/// What the router mounts for a path with no route entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Dedicated "no route" page naming the path
    #[default]
    NotFound,
    /// Mount the root page and rewrite the location to `/`
    RedirectRoot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub landing_style: LandingStyle,
    #[serde(default)]
    pub tutorial_catalog: CatalogSource,
    /// Externally hosted recognition board opened by the outbound links
    #[serde(default = "default_board_url")]
    pub recognition_board_url: String,
    #[serde(default)]
    pub unmatched_route: FallbackPolicy,
    #[serde(default = "default_start_path")]
    pub start_path: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_board_url() -> String {
    "http://127.0.0.1:5000/SmartBoard".to_string()
}

fn default_start_path() -> String {
    "/".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            landing_style: LandingStyle::default(),
            tutorial_catalog: CatalogSource::default(),
            recognition_board_url: default_board_url(),
            unmatched_route: FallbackPolicy::default(),
            start_path: default_start_path(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".gesture-flow"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Whether a config file has been written yet
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("gesture-flow.log"))
    }

    /// Load the user config, falling back to defaults when none exists
    pub fn load() -> anyhow::Result<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.landing_style, LandingStyle::Hero);
        assert_eq!(config.tutorial_catalog, CatalogSource::Preset(CatalogPreset::Board));
        assert_eq!(config.unmatched_route, FallbackPolicy::NotFound);
        assert_eq!(config.start_path, "/");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_parse_explicit_values() {
        let json = r#"{
            "landing_style": "minimal",
            "tutorial_catalog": { "path": "/tmp/gestures.yaml" },
            "unmatched_route": "redirect_root",
            "recognition_board_url": "http://board.local/"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.landing_style, LandingStyle::Minimal);
        assert_eq!(
            config.tutorial_catalog,
            CatalogSource::Path(PathBuf::from("/tmp/gestures.yaml"))
        );
        assert_eq!(config.unmatched_route, FallbackPolicy::RedirectRoot);
        assert_eq!(config.recognition_board_url, "http://board.local/");
    }

    #[test]
    fn test_parse_hand_preset() {
        let config: Config =
            serde_json::from_str(r#"{ "tutorial_catalog": { "preset": "hand" } }"#).unwrap();
        assert_eq!(config.tutorial_catalog, CatalogSource::Preset(CatalogPreset::Hand));
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let result = Config::load_from(Path::new("/nonexistent/gesture-flow/config.json"));
        assert!(result.is_err());
    }
}
