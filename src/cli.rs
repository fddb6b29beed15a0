use clap::{Args, Parser, ValueEnum};
use log::Level;

use hashface_core::{ColorModel, Theme};
use hashface_utils::hashes::{parse_hex_digest, sha256, DigestParseError};

use crate::commands::{
    decode_face::DecodeFace,
    face::Face,
    inspect::Inspect,
    render::Render,
};

/// Visual fingerprints for digests
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Overrides log_level parameter from config file
    #[arg(long)]
    pub log_level: Option<Level>,

    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser)]
pub enum SubCommand {
    Inspect(Inspect),
    Render(Render),
    Face(Face),
    DecodeFace(DecodeFace),
}

#[derive(Args)]
pub struct DigestInput {
    /// Text to hash with SHA-256
    input: String,
    /// Treat input as a hex-encoded digest
    #[arg(long)]
    hex: bool,
}

impl DigestInput {
    #[cfg(test)]
    pub fn new(input: &str, hex: bool) -> Self {
        Self { input: input.to_string(), hex }
    }

    pub fn digest(&self) -> Result<Vec<u8>, DigestParseError> {
        if self.hex {
            parse_hex_digest(&self.input)
        } else {
            Ok(sha256(self.input.as_bytes()).to_vec())
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorModelArg {
    /// Procedural or palette primary color (selected by digest)
    FullColor,
    /// Palette colors only
    Indexed,
}

impl From<ColorModelArg> for ColorModel {
    fn from(value: ColorModelArg) -> Self {
        match value {
            ColorModelArg::FullColor => ColorModel::FullColor,
            ColorModelArg::Indexed => ColorModel::Indexed,
        }
    }
}
