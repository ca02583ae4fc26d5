//! Runtime configuration for the command line tool.
//!
//! Read from the environment after loading an optional `.env` file.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const LOG_CONFIG_VAR: &str = "DOTTED_QUAD_LOG_CONFIG";
pub const NO_COLOR_VAR: &str = "DOTTED_QUAD_NO_COLOR";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs yaml file.
    pub log_config: String,
    /// Disable coloured output.
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            no_color: false,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the config variables.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Config {
        let default = Config::default();
        Config {
            log_config: lookup(LOG_CONFIG_VAR).unwrap_or(default.log_config),
            no_color: lookup(NO_COLOR_VAR).is_some(),
        }
    }
}

/// Initialise log4rs from the configured yaml, or log warnings to stderr.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
        log::debug!("Logging configured from {}", config.log_config);
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let log_config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(log_config)?;
    log::debug!("No {} found, logging to stderr", config.log_config);
    Ok(())
}
