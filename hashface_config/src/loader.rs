use std::path::Path;

use super::config::Config;
use super::ConfigError;

const DEFAULT_CONFIG_PATH: &str = "hashface.yaml";

struct EnvConfig {
    config_path: String,
    // Explicitly configured file must exist
    is_explicit: bool,
}

fn parse_env() -> EnvConfig {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    match std::env::var("CONFIG_PATH") {
        Ok(config_path) => EnvConfig { config_path, is_explicit: true },
        Err(_) => EnvConfig {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            is_explicit: false,
        },
    }
}

/// Parses YAML config and returns it together with warnings
pub fn parse_config_str(
    config_yaml: &str,
) -> Result<(Config, Vec<String>), ConfigError> {
    let mut warnings = vec![];
    let config = if config_yaml.trim().is_empty() {
        Config::default()
    } else {
        let deserializer = serde_yaml::Deserializer::from_str(config_yaml);
        serde_ignored::deserialize(deserializer, |path| {
            warnings.push(format!("unknown configuration parameter: {path}"));
        })?
    };

    // Validate config
    config.export.validate()?;
    warnings.extend(config.export.warnings());
    Ok((config, warnings))
}

fn load_config(
    config_path: &str,
    is_explicit: bool,
) -> Result<(Config, Vec<String>), ConfigError> {
    let (mut config, warnings) = if !is_explicit && !Path::new(config_path).exists() {
        let warning = format!("{config_path} not found, using defaults");
        (Config::default(), vec![warning])
    } else {
        let config_yaml = std::fs::read_to_string(config_path)?;
        parse_config_str(&config_yaml)?
    };
    config.config_path = config_path.to_string();
    Ok((config, warnings))
}

pub fn parse_config() -> Result<(Config, Vec<String>), ConfigError> {
    let env = parse_env();
    load_config(&env.config_path, env.is_explicit)
}
