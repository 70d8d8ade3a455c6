use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

pub const DEFAULT_SEED: u64 = 0x5eed;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Diorama Gallery".to_string(),
        }
    }
}

/// Gallery settings, read from an optional JSON file and overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub window: WindowConfig,
    /// Scene name or 1-based position to open first
    pub start_scene: Option<String>,
    pub seed: u64,
    pub show_ui: bool,
    pub vsync: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            start_scene: None,
            seed: DEFAULT_SEED,
            show_ui: true,
            vsync: true,
        }
    }
}

impl GalleryConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid gallery config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Config file (if any) with CLI flags applied on top
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(scene) = &cli.scene {
            self.start_scene = Some(scene.clone());
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if cli.no_ui {
            self.show_ui = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GalleryConfig::from_json(r#"{ "seed": 7, "window": { "width": 640 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, WindowConfig::default().height);
        assert!(config.show_ui);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GalleryConfig::from_json("{ seed: }").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GalleryConfig::load(Path::new("/nonexistent/gallery.json")).unwrap_err();
        assert!(format!("{err:#}").contains("gallery.json"));
    }
}
