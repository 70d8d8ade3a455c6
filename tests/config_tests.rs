use std::io::Write;

use clap::Parser;

use diorama_gallery::cli::Cli;
use diorama_gallery::config::{GalleryConfig, DEFAULT_SEED};

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["diorama-gallery"]);
        let config = GalleryConfig::resolve(&cli).unwrap();
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_flags_override_file() {
        let path = std::env::temp_dir().join(format!("diorama-gallery-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"{{ "seed": 9, "start_scene": "Volcano", "show_ui": true }}"#).unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let cli = Cli::parse_from(["diorama-gallery", "--config", &path_arg, "--scene", "Orrery", "--no-ui"]);
        let config = GalleryConfig::resolve(&cli).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.seed, 9);
        assert_eq!(config.start_scene.as_deref(), Some("Orrery"));
        assert!(!config.show_ui);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = GalleryConfig { seed: 1234, ..GalleryConfig::default() };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(GalleryConfig::from_json(&text).unwrap(), config);
    }
}
