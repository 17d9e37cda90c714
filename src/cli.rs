//! CLI definition using clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mygarage")]
#[command(version)]
#[command(about = "Car records service with insurance, road tax and inspection tracking")]
#[command(long_about = None)]
pub struct Cli {
    /// JSON config file. Defaults are used for missing keys, or for everything when omitted.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Load the demo fleet at startup (overrides config)
    #[arg(long)]
    pub seed: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.seed {
            config.seed_demo_data = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_config() {
        let cli = Cli::parse_from(["mygarage", "--port", "9000", "--seed"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.port, 9000);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::parse_from(["mygarage"]);
        let mut config = Config {
            port: 4000,
            ..Config::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.port, 4000);
        assert!(!config.seed_demo_data);
    }
}
