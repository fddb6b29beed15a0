use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;

use hashface_config::Config;
use hashface_core::{ColorModel, Identicon};
use hashface_utils::files::{write_file_atomic, FileSize};

use crate::cli::{ColorModelArg, DigestInput, ThemeArg};

/// Export identicon as PNG image
#[derive(Parser)]
pub struct Render {
    #[command(flatten)]
    input: DigestInput,
    output: PathBuf,
    /// Image size in pixels (default: export.image_size)
    #[arg(long)]
    size: Option<u32>,
    #[arg(long, value_enum)]
    model: Option<ColorModelArg>,
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
    /// Use transparent background
    #[arg(long, conflicts_with = "opaque")]
    transparent: bool,
    /// Use theme background
    #[arg(long)]
    opaque: bool,
    /// Write 4-color indexed PNG instead of RGBA
    #[arg(long)]
    indexed: bool,
}

impl Render {
    pub fn execute(&self, config: &Config) -> Result<(), Error> {
        let digest = self.input.digest()?;
        let model = self.model.map(ColorModel::from).unwrap_or(config.color_model);
        let mut config = config.clone();
        if let Some(theme) = self.theme {
            config.theme = theme.into();
        };
        let transparent = if self.transparent {
            true
        } else if self.opaque {
            false
        } else {
            config.export.transparent
        };
        let background = config.export_background(transparent);
        let size = self.size.unwrap_or(config.export.image_size);

        let identicon = Identicon::with_model(&digest, model);
        let compression = config.export.compression;
        let data = if self.indexed {
            identicon.to_indexed_png(size, background, compression)?
        } else {
            identicon.to_png(size, background, compression)?
        };
        write_file_atomic(&data, &self.output)?;
        log::debug!("identicon saved to {}", self.output.display());
        println!(
            "saved {size}x{size} image to {} ({})",
            self.output.display(),
            FileSize::new(data.len()),
        );
        Ok(())
    }
}
