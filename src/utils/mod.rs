//! Utility modules

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, InputConfig, LoggingConfig, OutputConfig};
pub use logging::setup_logging;
