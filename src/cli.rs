use std::path::PathBuf;

use clap::Parser;
use hyperview_hypercube::Theme;

use crate::config::ViewerConfig;

#[derive(Parser, Debug)]
#[command(name = "hyperview")]
#[command(version, about = "Rotate and project n-dimensional hypercubes into 3D")]
pub struct Cli {
    /// TOML config file (defaults to ./hyperview.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dimension to show first (0-11)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=11))]
    pub dimension: Option<u8>,

    /// Color theme: light or dark
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Start with animation paused
    #[arg(long)]
    pub paused: bool,

    /// Reload the config file when it changes on disk
    #[arg(long)]
    pub watch_config: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print per-dimension stats and a sample frame instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Time in seconds for the headless sample frame
    #[arg(long, default_value_t = 0.0)]
    pub time: f64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Command-line values win over the file.
    pub fn apply_overrides(&self, cfg: &mut ViewerConfig) {
        if let Some(d) = self.dimension {
            cfg.viewer.dimension = d as usize;
        }
        if let Some(theme) = self.theme {
            cfg.viewer.theme = theme;
        }
        if self.paused {
            cfg.viewer.running = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["hyperview"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.dimension.is_none());
        assert!(!cli.headless);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "hyperview",
            "--dimension",
            "7",
            "--theme",
            "light",
            "--paused",
            "-vv",
        ])
        .unwrap();
        let mut cfg = ViewerConfig::default();
        cli.apply_overrides(&mut cfg);
        assert_eq!(cfg.viewer.dimension, 7);
        assert_eq!(cfg.viewer.theme, Theme::Light);
        assert!(!cfg.viewer.running);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_dimension_above_eleven() {
        assert!(Cli::try_parse_from(["hyperview", "-d", "12"]).is_err());
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["hyperview", "--theme", "sepia"]).is_err());
    }
}
