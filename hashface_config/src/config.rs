use log::{Level as LogLevel};
use serde::Deserialize;

use hashface_core::{BackgroundStyle, ColorModel, Theme};

use super::export::ExportConfig;

fn default_log_level() -> LogLevel { LogLevel::Info }

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    // Properties auto-populated from the environment
    #[serde(skip)]
    pub config_path: String,

    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    // Theme used for previews and non-transparent exports
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub color_model: ColorModel,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: String::new(),
            log_level: default_log_level(),
            theme: Theme::default(),
            color_model: ColorModel::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    pub fn export_background(&self, transparent: bool) -> BackgroundStyle {
        if transparent {
            BackgroundStyle::Transparent
        } else {
            BackgroundStyle::Theme(self.theme)
        }
    }
}
