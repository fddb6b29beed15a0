use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;

use hashface_config::Config;
use hashface_core::{
    face::encode_face,
    BackgroundStyle,
    ColorModel,
    Identicon,
};
use hashface_utils::files::{write_file_atomic, FileSize};

use crate::cli::{ColorModelArg, DigestInput};

/// Export compact identicon as Face header
#[derive(Parser)]
pub struct Face {
    #[command(flatten)]
    input: DigestInput,
    output: PathBuf,
    /// Use light background instead of transparent one
    #[arg(long)]
    opaque: bool,
    /// Color model (default: indexed)
    #[arg(long, value_enum)]
    model: Option<ColorModelArg>,
}

impl Face {
    fn header(&self, config: &Config) -> Result<String, Error> {
        let digest = self.input.digest()?;
        let model = self.model.map(ColorModel::from).unwrap_or(ColorModel::Indexed);
        let transparent = config.export.transparent && !self.opaque;
        // Face headers always use light theme
        let background = BackgroundStyle::for_export(transparent);
        let identicon = Identicon::with_model(&digest, model);
        let data = identicon.to_indexed_png(
            config.export.face_size,
            background,
            config.export.compression,
        )?;
        log::debug!("Face image size: {}", FileSize::new(data.len()));
        Ok(encode_face(&data))
    }

    pub fn execute(&self, config: &Config) -> Result<(), Error> {
        let header = self.header(config)?;
        write_file_atomic(header.as_bytes(), &self.output)?;
        log::debug!("Face header saved to {}", self.output.display());
        println!(
            "saved Face header to {} ({})",
            self.output.display(),
            FileSize::new(header.len()),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hashface_core::{face::decode_face, FACE_SIZE};
    use super::*;

    #[test]
    fn test_face_command() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("face.txt");
        let command = Face {
            input: DigestInput::new("mySecret123", false),
            output: output.clone(),
            opaque: false,
            model: None,
        };
        command.execute(&Config::default()).unwrap();
        let header = std::fs::read_to_string(&output).unwrap();
        assert!(header.starts_with("Face: iVBORw0KGgo"));
        assert!(header.ends_with('\n'));

        let data = decode_face(&header).unwrap();
        let digest = DigestInput::new("mySecret123", false).digest().unwrap();
        let expected = Identicon::with_model(&digest, ColorModel::Indexed)
            .to_indexed_png(
                FACE_SIZE,
                BackgroundStyle::Transparent,
                Config::default().export.compression,
            )
            .unwrap();
        assert_eq!(data, expected);
    }

    #[test]
    fn test_face_command_opaque() {
        let command = Face {
            input: DigestInput::new("mySecret123", false),
            output: PathBuf::from("unused.txt"),
            opaque: false,
            model: None,
        };
        let transparent = command.header(&Config::default()).unwrap();
        let command = Face { opaque: true, ..command };
        let opaque = command.header(&Config::default()).unwrap();
        assert_ne!(transparent, opaque);
    }
}
