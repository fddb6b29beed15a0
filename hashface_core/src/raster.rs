use image::{ImageBuffer, RgbaImage};

use crate::colors::ResolvedColors;
use crate::palette::{Color, TRANSPARENT};
use crate::pattern::{Grid, Stencil, SPRITE_SIZE};

/// Canvas edge is this many sprite pixels wide
const CANVAS_UNITS: u32 = 8;
pub const MIN_CANVAS_SIZE: u32 = CANVAS_UNITS;
pub const MAX_CANVAS_SIZE: u32 = 4096;

// Indexed palette slots
pub const BACKGROUND_SLOT: u8 = 0;
pub const PRIMARY_SLOT: u8 = 1;
pub const SECONDARY_SLOT: u8 = 2;
pub const TRANSPARENT_SLOT: u8 = 3;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("canvas size must be between 8 and 4096, got {0}")]
    InvalidSize(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub size: u32,
    pub pixel_scale: u32,
    pub margin: u32,
}

impl Geometry {
    pub fn new(size: u32) -> Result<Self, RenderError> {
        if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&size) {
            return Err(RenderError::InvalidSize(size));
        };
        let pixel_scale = size / CANVAS_UNITS;
        let margin = (size - pixel_scale * SPRITE_SIZE as u32) / 2;
        Ok(Self { size, pixel_scale, margin })
    }
}

/// Square raster that can be painted with a pixel value
trait Canvas {
    type Pixel: Copy;

    fn put(&mut self, x: u32, y: u32, pixel: Self::Pixel);

    fn fill(&mut self, size: u32, pixel: Self::Pixel) {
        for y in 0..size {
            for x in 0..size {
                self.put(x, y, pixel);
            };
        };
    }
}

impl Canvas for RgbaImage {
    type Pixel = Color;

    fn put(&mut self, x: u32, y: u32, pixel: Color) {
        self.put_pixel(x, y, pixel);
    }
}

fn paint_layer<C: Canvas>(
    canvas: &mut C,
    geometry: &Geometry,
    grid: &Grid,
    pixel: C::Pixel,
) -> () {
    for (row, cells) in grid.iter().enumerate() {
        for (col, painted) in cells.iter().enumerate() {
            if !painted {
                continue;
            };
            let x0 = col as u32 * geometry.pixel_scale + geometry.margin;
            let y0 = row as u32 * geometry.pixel_scale + geometry.margin;
            let x1 = (x0 + geometry.pixel_scale).min(geometry.size);
            let y1 = (y0 + geometry.pixel_scale).min(geometry.size);
            for y in y0..y1 {
                for x in x0..x1 {
                    canvas.put(x, y, pixel);
                };
            };
        };
    };
}

/// Background first, then secondary layer, then primary layer on top
fn composite<C: Canvas>(
    canvas: &mut C,
    geometry: &Geometry,
    stencil: &Stencil,
    background: C::Pixel,
    primary: C::Pixel,
    secondary: C::Pixel,
) -> () {
    canvas.fill(geometry.size, background);
    paint_layer(canvas, geometry, &stencil.secondary, secondary);
    paint_layer(canvas, geometry, &stencil.primary, primary);
}

pub fn render_rgba(
    stencil: &Stencil,
    colors: &ResolvedColors,
    size: u32,
) -> Result<RgbaImage, RenderError> {
    let geometry = Geometry::new(size)?;
    let mut image: RgbaImage = ImageBuffer::new(size, size);
    composite(
        &mut image,
        &geometry,
        stencil,
        colors.background,
        colors.primary,
        colors.secondary,
    );
    Ok(image)
}

/// Square image with a 4-entry palette
/// (background, primary, secondary, transparent)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedImage {
    size: u32,
    palette: [Color; 4],
    indices: Vec<u8>,
}

impl Canvas for IndexedImage {
    type Pixel = u8;

    fn put(&mut self, x: u32, y: u32, pixel: u8) {
        let offset = (y * self.size + x) as usize;
        self.indices[offset] = pixel;
    }
}

impl IndexedImage {
    fn new(size: u32, palette: [Color; 4]) -> Self {
        Self {
            size,
            palette,
            indices: vec![BACKGROUND_SLOT; (size * size) as usize],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn palette(&self) -> &[Color; 4] {
        &self.palette
    }

    /// Palette indices in row-major order
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.indices[(y * self.size + x) as usize]
    }

    pub fn color_at(&self, x: u32, y: u32) -> Color {
        self.palette[usize::from(self.index_at(x, y))]
    }

    pub fn to_rgba(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.size, self.size, |x, y| self.color_at(x, y))
    }
}

/// With transparent background both slot 0 and slot 3 are transparent,
/// and the canvas is filled with slot 3
pub fn render_indexed(
    stencil: &Stencil,
    colors: &ResolvedColors,
    size: u32,
) -> Result<IndexedImage, RenderError> {
    let geometry = Geometry::new(size)?;
    let palette = [
        colors.background,
        colors.primary,
        colors.secondary,
        TRANSPARENT,
    ];
    let background_slot = if colors.has_transparent_background() {
        TRANSPARENT_SLOT
    } else {
        BACKGROUND_SLOT
    };
    let mut image = IndexedImage::new(size, palette);
    composite(
        &mut image,
        &geometry,
        stencil,
        background_slot,
        PRIMARY_SLOT,
        SECONDARY_SLOT,
    );
    Ok(image)
}
