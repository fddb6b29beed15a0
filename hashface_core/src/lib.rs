pub mod bits;
pub mod colors;
pub mod export;
pub mod face;
pub mod identicon;
pub mod palette;
pub mod pattern;
pub mod raster;

pub use colors::ColorModel;
pub use export::Compression;
pub use identicon::{Identicon, DISPLAY_SIZE, FACE_SIZE};
pub use palette::{BackgroundStyle, Theme};
