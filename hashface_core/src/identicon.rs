use image::RgbaImage;

use crate::colors::{resolve_colors, ColorModel, ResolvedColors};
use crate::export::{
    encode_indexed_png,
    encode_rgba_png,
    Compression,
    ExportError,
};
use crate::face::encode_face;
use crate::palette::BackgroundStyle;
use crate::pattern::Stencil;
use crate::raster::{render_indexed, render_rgba, IndexedImage, RenderError};

pub const DISPLAY_SIZE: u32 = 256;
pub const FACE_SIZE: u32 = 48;

/// Identicon generator for a digest.
/// Nothing is cached: every method recomputes the pipeline from the digest.
#[derive(Clone, Copy, Debug)]
pub struct Identicon<'a> {
    digest: &'a [u8],
    model: ColorModel,
}

impl<'a> Identicon<'a> {
    pub fn new(digest: &'a [u8]) -> Self {
        Self { digest, model: ColorModel::default() }
    }

    pub fn with_model(digest: &'a [u8], model: ColorModel) -> Self {
        Self { digest, model }
    }

    pub fn digest(&self) -> &'a [u8] {
        self.digest
    }

    pub fn model(&self) -> ColorModel {
        self.model
    }

    pub fn stencil(&self) -> Stencil {
        Stencil::from_digest(self.digest)
    }

    pub fn colors(&self, background: BackgroundStyle) -> ResolvedColors {
        resolve_colors(self.digest, self.model, background)
    }

    pub fn render(
        &self,
        size: u32,
        background: BackgroundStyle,
    ) -> Result<RgbaImage, RenderError> {
        render_rgba(&self.stencil(), &self.colors(background), size)
    }

    pub fn render_indexed(
        &self,
        size: u32,
        background: BackgroundStyle,
    ) -> Result<IndexedImage, RenderError> {
        render_indexed(&self.stencil(), &self.colors(background), size)
    }

    pub fn to_png(
        &self,
        size: u32,
        background: BackgroundStyle,
        compression: Compression,
    ) -> Result<Vec<u8>, ExportError> {
        let image = self.render(size, background)?;
        encode_rgba_png(&image, compression)
    }

    pub fn to_indexed_png(
        &self,
        size: u32,
        background: BackgroundStyle,
        compression: Compression,
    ) -> Result<Vec<u8>, ExportError> {
        let image = self.render_indexed(size, background)?;
        encode_indexed_png(&image, compression)
    }

    /// Compact 48x48 indexed image wrapped in Face header
    pub fn to_face(
        &self,
        background: BackgroundStyle,
        compression: Compression,
    ) -> Result<String, ExportError> {
        let data = self.to_indexed_png(FACE_SIZE, background, compression)?;
        Ok(encode_face(&data))
    }
}

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba};
    use sha2::{Digest, Sha256};
    use crate::face::decode_face;
    use crate::palette::{Theme, TRANSPARENT};
    use crate::raster::{BACKGROUND_SLOT, TRANSPARENT_SLOT};
    use super::*;

    fn fixture_digest() -> [u8; 32] {
        Sha256::digest(b"mySecret123").into()
    }

    fn decode_png(data: &[u8]) -> RgbaImage {
        image::load_from_memory_with_format(data, ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn test_identicon_fixture_stencil() {
        let digest = fixture_digest();
        let stencil = Identicon::new(&digest).stencil();
        assert_eq!(stencil.primary, [
            [false, true, false, true, false],
            [false, true, false, true, false],
            [true, true, false, true, true],
            [true, true, false, true, true],
            [true, true, false, true, true],
        ]);
        assert_eq!(stencil.secondary, [
            [false, true, true, true, false],
            [true, true, false, true, true],
            [false, false, false, false, false],
            [false, true, false, true, false],
            [true, false, true, false, true],
        ]);
    }

    #[test]
    fn test_identicon_fixture_render() {
        let digest = fixture_digest();
        let identicon = Identicon::new(&digest);
        let image = identicon.render(DISPLAY_SIZE, BackgroundStyle::Theme(Theme::Light)).unwrap();
        assert_eq!(image.dimensions(), (256, 256));
        let background = Rgba([0xec, 0xf0, 0xf1, 0xff]);
        let primary = Rgba([221, 213, 145, 255]);
        let secondary = Rgba([0x24, 0xc3, 0x33, 0xff]);
        assert_eq!(*image.get_pixel(0, 0), background);
        // Cell (0, 0): secondary bit 15 is not set
        assert_eq!(*image.get_pixel(48, 48), background);
        // Cell (0, 1): primary over secondary
        assert_eq!(*image.get_pixel(80, 48), primary);
        // Cell (0, 2): secondary only
        assert_eq!(*image.get_pixel(112, 79), secondary);
        // Cell (3, 1): primary only
        assert_eq!(*image.get_pixel(85, 150), primary);
        // Cell (3, 2): empty
        assert_eq!(*image.get_pixel(127, 150), background);
        // Mirror of cell (2, 0)
        assert_eq!(*image.get_pixel(48 + 4 * 32, 48 + 2 * 32), primary);
    }

    #[test]
    fn test_identicon_fixture_indexed() {
        let digest = fixture_digest();
        let identicon = Identicon::with_model(&digest, ColorModel::Indexed);
        let image = identicon.render_indexed(DISPLAY_SIZE, BackgroundStyle::Theme(Theme::Dark)).unwrap();
        assert_eq!(image.palette(), &[
            Rgba([0x39, 0x39, 0x39, 0xff]),
            Rgba([0xef, 0x3e, 0x96, 0xff]),
            Rgba([0x24, 0xc3, 0x33, 0xff]),
            TRANSPARENT,
        ]);
    }

    #[test]
    fn test_identicon_is_deterministic() {
        let digest = fixture_digest();
        let first = Identicon::new(&digest)
            .to_png(DISPLAY_SIZE, BackgroundStyle::default(), Compression::Best)
            .unwrap();
        let second = Identicon::new(&digest)
            .to_png(DISPLAY_SIZE, BackgroundStyle::default(), Compression::Best)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_identicon_empty_digest() {
        let identicon = Identicon::new(&[]);
        assert!(identicon.digest().is_empty());
        assert_eq!(identicon.model(), ColorModel::FullColor);
        let image = identicon.render(DISPLAY_SIZE, BackgroundStyle::default()).unwrap();
        assert!(image.pixels().all(|pixel| *pixel == Rgba([255, 255, 255, 255])));
        let face = identicon.to_face(BackgroundStyle::Transparent, Compression::Best).unwrap();
        assert!(face.starts_with("Face: "));
    }

    #[test]
    fn test_identicon_invalid_size() {
        let digest = fixture_digest();
        let result = Identicon::new(&digest).to_png(4, BackgroundStyle::default(), Compression::Best);
        assert!(matches!(
            result,
            Err(ExportError::RenderError(RenderError::InvalidSize(4))),
        ));
    }

    #[test]
    fn test_face_round_trip() {
        let digest = fixture_digest();
        let identicon = Identicon::with_model(&digest, ColorModel::Indexed);
        for transparent in [true, false] {
            let background = BackgroundStyle::for_export(transparent);
            let face = identicon.to_face(background, Compression::Best).unwrap();
            let face_data = decode_face(&face).unwrap();
            let direct_data = identicon
                .to_indexed_png(FACE_SIZE, background, Compression::Best)
                .unwrap();
            assert_eq!(face_data, direct_data);
            let image = decode_png(&face_data);
            assert_eq!(image.dimensions(), (48, 48));
            assert_eq!(image, identicon.render(FACE_SIZE, background).unwrap());
        };
    }

    #[test]
    fn test_face_transparent_background_slot() {
        let digest = fixture_digest();
        let identicon = Identicon::with_model(&digest, ColorModel::Indexed);
        let image = identicon.render_indexed(FACE_SIZE, BackgroundStyle::Transparent).unwrap();
        assert_eq!(image.size(), 48);
        assert_eq!(image.palette()[usize::from(BACKGROUND_SLOT)].0[3], 0);
        assert_eq!(image.index_at(0, 0), TRANSPARENT_SLOT);

        let face = identicon.to_face(BackgroundStyle::Transparent, Compression::Best).unwrap();
        let decoded = decode_png(&decode_face(&face).unwrap());
        assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
    }
}
