use crate::error::{Error, ErrorType, Result};

use clap::Args;

use std::sync::OnceLock;

#[derive(Clone, Default, Args)]
pub struct Config {
    /// Print more information (repeat for even more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Default log filter directive for this verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Returns the process-wide configuration, or the default one if
/// `set_config` was never called.
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

pub fn set_config(config: Config) -> Result<()> {
    CONFIG.set(config).or(Err(Error::new_s(
        ErrorType::LogicError,
        "config already set",
    )))
}
