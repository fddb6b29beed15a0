mod config;
mod export;
mod loader;

pub use config::Config;
pub use export::ExportConfig;
pub use loader::{parse_config, parse_config_str};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("invalid yaml data: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("{0}")]
    ValidationError(&'static str),
}
