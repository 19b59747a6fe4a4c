//! Command-line argument parsing for the pipeline host.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Loam pipeline command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "loam", about = "Loam terrain pipeline")]
pub struct CliArgs {
    /// Tick period in milliseconds.
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Generation profile at startup ("verdant" or "barren").
    #[arg(long)]
    pub profile: Option<String>,

    /// Number of ticks the host runs before exiting (0 = run forever).
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(tick_ms) = args.tick_ms {
            self.pipeline.tick_interval_ms = tick_ms;
        }
        if let Some(ref profile) = args.profile {
            self.pipeline.start_profile = profile.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let args = CliArgs {
            tick_ms: Some(25),
            profile: Some("barren".to_string()),
            ticks: None,
            log_level: Some("debug".to_string()),
            config: None,
        };

        let mut config = Config::default();
        config.apply_cli_overrides(&args);

        assert_eq!(config.pipeline.tick_interval_ms, 25);
        assert_eq!(config.pipeline.start_profile, "barren");
        assert_eq!(config.debug.log_level, "debug");
    }

    #[test]
    fn test_no_overrides_leaves_config_unchanged() {
        let args = CliArgs {
            tick_ms: None,
            profile: None,
            ticks: None,
            log_level: None,
            config: None,
        };

        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config, Config::default());
    }
}
