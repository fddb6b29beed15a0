use std::path::PathBuf;

use anyhow::{anyhow, Error};
use clap::Parser;

use hashface_core::face::decode_face;
use hashface_utils::files::write_file_atomic;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Extract PNG image from Face header file
#[derive(Parser)]
pub struct DecodeFace {
    input: PathBuf,
    output: PathBuf,
}

impl DecodeFace {
    pub fn execute(&self) -> Result<(), Error> {
        let header = std::fs::read_to_string(&self.input)?;
        let data = decode_face(&header)?;
        if !data.starts_with(&PNG_SIGNATURE) {
            return Err(anyhow!("Face header does not contain PNG image"));
        };
        write_file_atomic(&data, &self.output)?;
        println!("saved image to {}", self.output.display());
        Ok(())
    }
}
