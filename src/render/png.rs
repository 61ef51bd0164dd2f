//! PNG output for converted buffers.
//!
//! Writes a pixel buffer to a PNG file with optional integer upscaling,
//! nearest-neighbour so the pixel-art blocks stay crisp.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::buffer::PixelBuffer;
use crate::error::{PixlError, Result};

/// Write a pixel buffer to a PNG file.
///
/// # Arguments
///
/// * `buffer` - The converted buffer to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(buffer: &PixelBuffer, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let width = buffer.width() * scale;
    let height = buffer.height() * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let i = buffer.offset(x, y);
            let px = &buffer.data()[i..i + 4];
            let rgba = Rgba([px[0], px[1], px[2], px[3]]);

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x * scale + sx, y * scale + sy, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| PixlError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
