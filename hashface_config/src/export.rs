use serde::Deserialize;

use hashface_core::{
    raster::{MAX_CANVAS_SIZE, MIN_CANVAS_SIZE},
    Compression,
    DISPLAY_SIZE,
    FACE_SIZE,
};

use super::ConfigError;

const fn default_image_size() -> u32 { DISPLAY_SIZE }
const fn default_face_size() -> u32 { FACE_SIZE }
const fn default_transparent() -> bool { true }

#[derive(Clone, Debug, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_image_size")]
    pub image_size: u32,
    #[serde(default = "default_face_size")]
    pub face_size: u32,
    #[serde(default)]
    pub compression: Compression,
    // Background of exported images
    #[serde(default = "default_transparent")]
    pub transparent: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            image_size: default_image_size(),
            face_size: default_face_size(),
            compression: Compression::default(),
            transparent: default_transparent(),
        }
    }
}

fn is_valid_size(size: u32) -> bool {
    (MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&size)
}

impl ExportConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_size(self.image_size) {
            return Err(ConfigError::ValidationError("image_size is out of range"));
        };
        if !is_valid_size(self.face_size) {
            return Err(ConfigError::ValidationError("face_size is out of range"));
        };
        Ok(())
    }

    pub(super) fn warnings(&self) -> Vec<String> {
        let mut warnings = vec![];
        if self.face_size != FACE_SIZE {
            warnings.push(format!(
                "face_size is {}, Face header readers expect {}x{} images",
                self.face_size,
                FACE_SIZE,
                FACE_SIZE,
            ));
        };
        if self.image_size % 8 != 0 {
            warnings.push("image_size is not a multiple of 8".to_string());
        };
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_default() {
        let config = ExportConfig::default();
        assert_eq!(config.image_size, 256);
        assert_eq!(config.face_size, 48);
        assert_eq!(config.compression, Compression::Best);
        assert_eq!(config.transparent, true);
        assert!(config.validate().is_ok());
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_export_config_validate() {
        let config = ExportConfig { image_size: 4, ..Default::default() };
        assert!(config.validate().is_err());
        let config = ExportConfig { face_size: 10_000, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_export_config_warnings() {
        let config = ExportConfig { image_size: 100, face_size: 64, ..Default::default() };
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], "face_size is 64, Face header readers expect 48x48 images");
    }
}
