use log::Level;

use hashface_config::{parse_config, Config, ConfigError};

use crate::logger::configure_logger;

/// Loads config and installs logger.
/// Log level given on command line takes precedence over config file.
pub fn initialize_app(log_level: Option<Level>) -> Result<Config, ConfigError> {
    let (config, config_warnings) = match parse_config() {
        Ok(result) => result,
        Err(error) => {
            configure_logger(log_level.unwrap_or(Level::Warn));
            return Err(error);
        },
    };
    configure_logger(log_level.unwrap_or(config.log_level));
    log::debug!("config loaded from {}", config.config_path);
    for warning in config_warnings {
        log::warn!("{}", warning);
    };
    Ok(config)
}
