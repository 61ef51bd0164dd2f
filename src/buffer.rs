//! Pixel buffer type for interleaved RGBA image data.
//!
//! The pipeline works on flat row-major RGBA buffers, matching the layout
//! the `image` crate decodes into. Every stage leaves channel values in
//! [0,255]; float intermediates are clamped before storage.

use crate::error::{PixlError, Result};
use crate::types::Colour;

/// An owned RGBA pixel buffer.
///
/// `data.len()` is always `width * height * 4`. Ownership transfers
/// stage-to-stage through the pipeline; the caller's source buffer is
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap an existing interleaved RGBA vector.
    ///
    /// Fails if the length doesn't match the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(PixlError::InvalidParameter {
                message: format!(
                    "Buffer length {} does not match {}x{} RGBA ({} bytes)",
                    data.len(),
                    width,
                    height,
                    expected
                ),
                help: None,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw bytes, for in-place stages.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning the raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel (x, y).
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Get the RGB colour at (x, y). Panics if out of bounds.
    pub fn colour_at(&self, x: u32, y: u32) -> Colour {
        let i = self.offset(x, y);
        Colour::rgb(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Set the RGB channels at (x, y), leaving alpha unchanged.
    pub fn set_colour(&mut self, x: u32, y: u32, colour: Colour) {
        let i = self.offset(x, y);
        self.data[i] = colour.r;
        self.data[i + 1] = colour.g;
        self.data[i + 2] = colour.b;
    }

    /// Alpha channel at (x, y).
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.data[self.offset(x, y) + 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_opaque_black() {
        let buf = PixelBuffer::new(2, 2);
        assert_eq!(buf.data().len(), 16);
        assert_eq!(buf.colour_at(0, 0), Colour::BLACK);
        assert_eq!(buf.alpha_at(1, 1), 255);
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 15]).is_err());
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 12]).is_err());
    }

    #[test]
    fn test_set_colour_preserves_alpha() {
        let mut buf = PixelBuffer::from_raw(1, 1, vec![10, 20, 30, 128]).unwrap();
        buf.set_colour(0, 0, Colour::rgb(1, 2, 3));
        assert_eq!(buf.colour_at(0, 0), Colour::rgb(1, 2, 3));
        assert_eq!(buf.alpha_at(0, 0), 128);
    }

    #[test]
    fn test_offset_row_major() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.offset(0, 0), 0);
        assert_eq!(buf.offset(2, 0), 8);
        assert_eq!(buf.offset(0, 1), 12);
    }
}
