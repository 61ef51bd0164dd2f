//! pixl - Pixel art image converter
//!
//! A library for converting raster images into stylized low-resolution
//! pixel art: downsampling, tonal adjustment, palette quantization, and
//! ordered dithering, plus PNG export.

pub mod buffer;
pub mod cli;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use buffer::PixelBuffer;
pub use error::{PixlError, Result};
pub use pipeline::{
    adjust, convert, dither_offset, quantize, quantize_rows, Conversion, LinearScan,
    NearestColourIndex, BAYER_4X4,
};
pub use render::{load_image, resize_to_width, write_png};
pub use types::{
    Adjustments, Builtin, Colour, ConversionRequest, Palette, PaletteSpec, ResolvedPalette,
};
