use image::Rgba;
use serde::Deserialize;

use crate::bits::{bit, bits_le, byte};
use crate::palette::{
    BackgroundStyle,
    Color,
    BACKGROUND_VARIANTS,
    INTENSE_PALETTE,
    PALETTE_SIZE,
    VIVID_PALETTE,
};

// Bit layout of the selector block (bits 244..=255)
pub const SECONDARY_INDEX_BIT: isize = 244;
pub const PRIMARY_INDEX_BIT: isize = 248;
pub const BACKGROUND_BIT: isize = 252;
pub const PALETTE_FLAG_BIT: isize = 255;
const INDEX_WIDTH: u32 = 4;
const BACKGROUND_WIDTH: u32 = 3;

// Procedural color fields
const HUE_BYTE: isize = 28;
const SATURATION_BYTE: isize = 30;
const LIGHTNESS_BYTE: isize = 31;

/// Digests shorter than this use default selectors
pub const MIN_DIGEST_LENGTH: usize = 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorModel {
    /// Primary color is either procedural (HSL) or taken from the vivid palette
    #[default]
    FullColor,
    /// Both colors are taken from palettes
    Indexed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSelection {
    pub primary_index: usize,
    pub secondary_index: usize,
    pub background_variant: usize,
    /// Bit 255. When not set, full-color model derives primary color from HSL fields
    pub use_palette: bool,
}

impl ColorSelection {
    pub const DEFAULT: Self = Self {
        primary_index: 0,
        secondary_index: 1,
        background_variant: 0,
        use_palette: true,
    };

    pub fn from_digest(digest: &[u8]) -> Self {
        if digest.len() < MIN_DIGEST_LENGTH {
            return Self::DEFAULT;
        };
        let primary_index =
            bits_le(digest, PRIMARY_INDEX_BIT, INDEX_WIDTH) as usize % PALETTE_SIZE;
        let secondary_index =
            bits_le(digest, SECONDARY_INDEX_BIT, INDEX_WIDTH) as usize % PALETTE_SIZE;
        let background_variant =
            bits_le(digest, BACKGROUND_BIT, BACKGROUND_WIDTH) as usize % BACKGROUND_VARIANTS;
        Self {
            primary_index,
            secondary_index,
            background_variant,
            use_palette: bit(digest, PALETTE_FLAG_BIT),
        }
    }
}

fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    (value - from.0) * (to.1 - to.0) / (from.1 - from.0) + to.0
}

/// Hue in degrees, saturation and lightness in percent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Soft colors: saturation within 45..=65, lightness within 55..=75
    pub fn from_digest(digest: &[u8]) -> Self {
        let hue_high = u32::from(byte(digest, HUE_BYTE) & 0x0f) << 8;
        let hue_low = u32::from(byte(digest, HUE_BYTE + 1));
        let hue_field = f64::from(hue_high | hue_low);
        let saturation_field = f64::from(byte(digest, SATURATION_BYTE));
        let lightness_field = f64::from(byte(digest, LIGHTNESS_BYTE));
        Self {
            hue: map_range(hue_field, (0.0, 4095.0), (0.0, 360.0)),
            saturation: 65.0 - map_range(saturation_field, (0.0, 255.0), (0.0, 20.0)),
            lightness: 75.0 - map_range(lightness_field, (0.0, 255.0), (0.0, 20.0)),
        }
    }

    fn hue_to_channel(a: f64, b: f64, hue: f64) -> f64 {
        let hue = if hue < 0.0 {
            hue + 1.0
        } else if hue > 1.0 {
            hue - 1.0
        } else {
            hue
        };
        if hue < 1.0 / 6.0 {
            a + (b - a) * 6.0 * hue
        } else if hue < 1.0 / 2.0 {
            b
        } else if hue < 2.0 / 3.0 {
            a + (b - a) * (2.0 / 3.0 - hue) * 6.0
        } else {
            a
        }
    }

    /// https://www.w3.org/TR/css-color-3/#hsl-color
    pub fn to_color(&self) -> Color {
        let hue = self.hue / 360.0;
        let saturation = self.saturation / 100.0;
        let lightness = self.lightness / 100.0;
        let b = if lightness <= 0.5 {
            lightness * (saturation + 1.0)
        } else {
            lightness + saturation - lightness * saturation
        };
        let a = lightness * 2.0 - b;
        let to_byte = |value: f64| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba([
            to_byte(Self::hue_to_channel(a, b, hue + 1.0 / 3.0)),
            to_byte(Self::hue_to_channel(a, b, hue)),
            to_byte(Self::hue_to_channel(a, b, hue - 1.0 / 3.0)),
            0xff,
        ])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimarySource {
    Procedural,
    Palette,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedColors {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub selection: ColorSelection,
    pub primary_source: PrimarySource,
}

impl ResolvedColors {
    pub fn has_transparent_background(&self) -> bool {
        self.background.0[3] == 0
    }
}

pub fn resolve_colors(
    digest: &[u8],
    model: ColorModel,
    background: BackgroundStyle,
) -> ResolvedColors {
    let selection = ColorSelection::from_digest(digest);
    let primary_source = match model {
        ColorModel::FullColor if !selection.use_palette => PrimarySource::Procedural,
        _ => PrimarySource::Palette,
    };
    let primary = match primary_source {
        PrimarySource::Procedural => Hsl::from_digest(digest).to_color(),
        PrimarySource::Palette => VIVID_PALETTE[selection.primary_index],
    };
    log::debug!(
        "selectors: primary={} secondary={} background={} source={:?}",
        selection.primary_index,
        selection.secondary_index,
        selection.background_variant,
        primary_source,
    );
    ResolvedColors {
        primary,
        secondary: INTENSE_PALETTE[selection.secondary_index],
        background: background.color(selection.background_variant),
        selection,
        primary_source,
    }
}
