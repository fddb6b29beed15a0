use image::Rgba;
use serde::Deserialize;

pub type Color = Rgba<u8>;

const fn rgb(value: u32) -> Color {
    Rgba([
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
        0xff,
    ])
}

pub const PALETTE_SIZE: usize = 16;
pub const BACKGROUND_VARIANTS: usize = 3;

pub const VIVID_PALETTE: [Color; PALETTE_SIZE] = [
    rgb(0x00bf93), // turquoise
    rgb(0x2dcc70), // mint
    rgb(0x42e453), // green
    rgb(0xf1c40f), // yellow orange
    rgb(0xe67f22), // brown
    rgb(0xff944e), // orange
    rgb(0xe84c3d), // red
    rgb(0x3598db), // blue
    rgb(0x9a59b5), // purple
    rgb(0xef3e96), // magenta
    rgb(0xdf21b9), // violet
    rgb(0x7dc2d2), // light blue
    rgb(0x16a086),
    rgb(0x27ae61),
    rgb(0x24c333),
    rgb(0x1cabbb),
];

pub const INTENSE_PALETTE: [Color; PALETTE_SIZE] = [
    rgb(0x34495e), // dark blue
    rgb(0x95a5a5), // grey
    rgb(0xd25400),
    rgb(0xc1392b),
    rgb(0x297fb8),
    rgb(0x8d44ad),
    rgb(0xbe127e),
    rgb(0xe52383),
    rgb(0x27ae61),
    rgb(0x24c333),
    rgb(0xd9d921),
    rgb(0xf39c11),
    rgb(0xff5500),
    rgb(0x1cabbb),
    rgb(0x232323),
    rgb(0x7e8c8d),
];

const LIGHT_BACKGROUNDS: [Color; BACKGROUND_VARIANTS] = [
    rgb(0xffffff),
    rgb(0xf3f5f7),
    rgb(0xecf0f1),
];

const DARK_BACKGROUNDS: [Color; BACKGROUND_VARIANTS] = [
    rgb(0x1e1e1e),
    rgb(0x2d3e50),
    rgb(0x393939),
];

pub const TRANSPARENT: Color = Rgba([0, 0, 0, 0]);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn backgrounds(&self) -> &'static [Color; BACKGROUND_VARIANTS] {
        match self {
            Self::Light => &LIGHT_BACKGROUNDS,
            Self::Dark => &DARK_BACKGROUNDS,
        }
    }
}

/// Canvas background: one of the theme colors, or fully transparent (export only)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundStyle {
    Theme(Theme),
    Transparent,
}

impl BackgroundStyle {
    /// Exports without an explicit theme use the light table
    pub fn for_export(transparent: bool) -> Self {
        if transparent {
            Self::Transparent
        } else {
            Self::Theme(Theme::Light)
        }
    }

    pub fn color(&self, variant: usize) -> Color {
        match self {
            Self::Theme(theme) => theme.backgrounds()[variant % BACKGROUND_VARIANTS],
            Self::Transparent => TRANSPARENT,
        }
    }
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self::Theme(Theme::default())
    }
}

pub fn color_to_hex(color: &Color) -> String {
    let Rgba([red, green, blue, alpha]) = *color;
    if alpha == 0xff {
        format!("#{red:02x}{green:02x}{blue:02x}")
    } else {
        format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
    }
}
