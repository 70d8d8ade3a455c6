// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "diorama-gallery")]
#[command(about = "Gallery of procedural 3D dioramas", long_about = None)]
pub struct Cli {
    /// Scene to open first (name or 1-based position)
    #[arg(long)]
    pub scene: Option<String>,

    /// Seed for procedural placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable UI elements
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Print the scene catalogue and exit
    #[arg(long)]
    pub list: bool,

    /// Print a JSON summary of one scene and exit
    #[arg(long, value_name = "SCENE")]
    pub describe: Option<String>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["diorama-gallery", "--scene", "Coral Reef", "--seed", "42", "--no-ui", "-vv"]);
        assert_eq!(cli.scene.as_deref(), Some("Coral Reef"));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.no_ui);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn defaults_are_empty() {
        let cli = Cli::parse_from(["diorama-gallery"]);
        assert!(cli.scene.is_none());
        assert!(!cli.list);
        assert_eq!(cli.verbose, 0);
    }
}
