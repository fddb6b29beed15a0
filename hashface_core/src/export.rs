use image::RgbaImage;
use serde::Deserialize;

use crate::raster::{IndexedImage, RenderError};

// 4 palette entries fit into 2 bits per pixel
const INDEXED_BIT_DEPTH: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compression {
    Fast,
    Default,
    #[default]
    Best,
}

impl From<Compression> for png::Compression {
    fn from(value: Compression) -> Self {
        match value {
            Compression::Fast => png::Compression::Fast,
            Compression::Default => png::Compression::Default,
            Compression::Best => png::Compression::Best,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    RenderError(#[from] RenderError),

    #[error("PNG encoding failed: {0}")]
    EncodingError(#[from] png::EncodingError),
}

/// Encodes image as 8-bit RGBA PNG
pub fn encode_rgba_png(
    image: &RgbaImage,
    compression: Compression,
) -> Result<Vec<u8>, ExportError> {
    let mut output = vec![];
    let mut encoder = png::Encoder::new(&mut output, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(compression.into());
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(output)
}

fn pack_indices(image: &IndexedImage) -> Vec<u8> {
    let size = image.size() as usize;
    let pixels_per_byte = 8 / INDEXED_BIT_DEPTH;
    let row_length = size.div_ceil(pixels_per_byte);
    let mut data = vec![0; row_length * size];
    for (y, row) in image.indices().chunks(size).enumerate() {
        for (x, index) in row.iter().enumerate() {
            // Leftmost pixel occupies the high bits
            let shift = 8 - INDEXED_BIT_DEPTH * (x % pixels_per_byte + 1);
            data[y * row_length + x / pixels_per_byte] |= (index & 0b11) << shift;
        };
    };
    data
}

/// Encodes image as 2-bit indexed PNG with PLTE and tRNS chunks
pub fn encode_indexed_png(
    image: &IndexedImage,
    compression: Compression,
) -> Result<Vec<u8>, ExportError> {
    let palette: Vec<u8> = image.palette().iter()
        .flat_map(|color| [color.0[0], color.0[1], color.0[2]])
        .collect();
    let alphas: Vec<u8> = image.palette().iter()
        .map(|color| color.0[3])
        .collect();
    let data = pack_indices(image);

    let mut output = vec![];
    let mut encoder = png::Encoder::new(&mut output, image.size(), image.size());
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Two);
    encoder.set_palette(palette);
    encoder.set_trns(alphas);
    encoder.set_compression(compression.into());
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    log::debug!("encoded {0}x{0} indexed image ({1} bytes)", image.size(), output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba};
    use crate::colors::{resolve_colors, ColorModel};
    use crate::palette::{BackgroundStyle, Theme, TRANSPARENT};
    use crate::pattern::Stencil;
    use crate::raster::{render_indexed, render_rgba};
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn test_digest() -> Vec<u8> {
        (0..32u8).map(|value| value.wrapping_mul(89).wrapping_add(3)).collect()
    }

    fn decode_png(data: &[u8]) -> RgbaImage {
        image::load_from_memory_with_format(data, ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    // IHDR fields follow signature, chunk length and chunk type
    fn ihdr_bit_depth_and_color_type(data: &[u8]) -> (u8, u8) {
        assert_eq!(&data[12..16], b"IHDR");
        (data[24], data[25])
    }

    fn contains_chunk(data: &[u8], chunk_type: &[u8; 4]) -> bool {
        data.windows(4).any(|window| window == chunk_type)
    }

    #[test]
    fn test_encode_rgba_png() {
        let digest = test_digest();
        let stencil = Stencil::from_digest(&digest);
        let colors = resolve_colors(&digest, ColorModel::FullColor, BackgroundStyle::Theme(Theme::Dark));
        let image = render_rgba(&stencil, &colors, 64).unwrap();
        let data = encode_rgba_png(&image, Compression::Best).unwrap();
        assert_eq!(data[..8], PNG_SIGNATURE);
        assert_eq!(ihdr_bit_depth_and_color_type(&data), (8, 6));
        assert_eq!(decode_png(&data), image);
    }

    #[test]
    fn test_encode_indexed_png() {
        let digest = test_digest();
        let stencil = Stencil::from_digest(&digest);
        let colors = resolve_colors(&digest, ColorModel::Indexed, BackgroundStyle::Theme(Theme::Light));
        let image = render_indexed(&stencil, &colors, 48).unwrap();
        let data = encode_indexed_png(&image, Compression::Best).unwrap();
        assert_eq!(data[..8], PNG_SIGNATURE);
        assert_eq!(ihdr_bit_depth_and_color_type(&data), (2, 3));
        assert!(contains_chunk(&data, b"PLTE"));
        assert!(contains_chunk(&data, b"tRNS"));
        assert_eq!(decode_png(&data), image.to_rgba());
    }

    #[test]
    fn test_encode_indexed_png_transparent() {
        let digest = test_digest();
        let stencil = Stencil::from_digest(&digest);
        let colors = resolve_colors(&digest, ColorModel::Indexed, BackgroundStyle::Transparent);
        let image = render_indexed(&stencil, &colors, 48).unwrap();
        let data = encode_indexed_png(&image, Compression::Fast).unwrap();
        let decoded = decode_png(&data);
        assert_eq!(*decoded.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(decoded, image.to_rgba());
    }

    #[test]
    fn test_pack_indices() {
        let digest = [0xff; 4];
        let stencil = Stencil::from_digest(&digest);
        let mut colors = resolve_colors(&digest, ColorModel::Indexed, BackgroundStyle::default());
        colors.primary = Rgba([1, 2, 3, 255]);
        let image = render_indexed(&stencil, &colors, 8).unwrap();
        let data = pack_indices(&image);
        // 8 pixels per row, 2 bytes per row
        assert_eq!(data.len(), 16);
        // Row 0 is margin (pixel scale 1, margin 1)
        assert_eq!(data[0..2], [0, 0]);
        // Row 1: background, 5 x primary, background, background
        assert_eq!(data[2..4], [0b00_01_01_01, 0b01_01_00_00]);
    }

    #[test]
    fn test_compression_levels() {
        let image = render_rgba(
            &Stencil::from_digest(&test_digest()),
            &resolve_colors(&test_digest(), ColorModel::FullColor, BackgroundStyle::default()),
            256,
        ).unwrap();
        let fast = encode_rgba_png(&image, Compression::Fast).unwrap();
        let best = encode_rgba_png(&image, Compression::Best).unwrap();
        assert_eq!(decode_png(&fast), decode_png(&best));
    }
}
