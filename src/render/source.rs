//! Source image loading and downsampling.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::buffer::PixelBuffer;
use crate::error::{PixlError, Result};

/// Decode an image file into a pixel buffer.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|e| PixlError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    PixelBuffer::from_raw(width, height, img.into_raw())
}

/// Downsample a buffer to the given output width, preserving aspect ratio.
///
/// Height is `floor(width * aspect)` with a minimum of 1. Nearest-neighbour
/// sampling, so no new colours are invented before quantization.
pub fn resize_to_width(buffer: &PixelBuffer, width: u32) -> Result<PixelBuffer> {
    if width == 0 {
        return Err(PixlError::InvalidParameter {
            message: "Output width must be at least 1".to_string(),
            help: None,
        });
    }
    if buffer.pixel_count() == 0 {
        return Err(PixlError::MissingInput {
            message: "No source image loaded".to_string(),
        });
    }

    let aspect = buffer.height() as f64 / buffer.width() as f64;
    let height = ((width as f64 * aspect) as u32).max(1);

    let img: RgbaImage =
        RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec())
            .expect("buffer length invariant");
    let resized = imageops::resize(&img, width, height, FilterType::Nearest);

    PixelBuffer::from_raw(width, height, resized.into_raw())
}
