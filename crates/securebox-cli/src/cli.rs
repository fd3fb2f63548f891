//! Command-line argument parsing for securebox

use clap::Parser;
use securebox_core::{BoxConfig, DEFAULT_MAX_SHUFFLE_TOGGLES};

/// Unlock a randomly scrambled SecureBox by solving its toggle system over GF(2)
#[derive(Parser, Debug)]
#[command(name = "securebox", author, version, about, long_about = None)]
pub struct Cli {
    /// Number of rows
    #[arg(value_name = "ROWS", value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Number of columns
    #[arg(value_name = "COLUMNS", value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: u32,

    /// Seed for the initial shuffle (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Upper bound on random toggles in the initial shuffle
    #[arg(long, default_value_t = DEFAULT_MAX_SHUFFLE_TOGGLES)]
    pub max_shuffle: u64,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Draw the box before and after unlocking
    #[arg(long)]
    pub show: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn box_config(&self) -> BoxConfig {
        let config = BoxConfig::new(self.rows as usize, self.columns as usize)
            .with_max_shuffle_toggles(self.max_shuffle);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        let cli = Cli::try_parse_from(["securebox", "3", "5", "--seed", "9"]).unwrap();
        let config = cli.box_config();
        assert_eq!((config.rows, config.columns), (3, 5));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_shuffle_toggles, DEFAULT_MAX_SHUFFLE_TOGGLES);
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(Cli::try_parse_from(["securebox", "0", "5"]).is_err());
        assert!(Cli::try_parse_from(["securebox", "4"]).is_err());
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["securebox", "2", "2", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }
}
