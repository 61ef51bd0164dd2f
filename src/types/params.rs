//! Conversion parameters and request validation.

use crate::error::{PixlError, Result};

use super::PaletteSpec;

/// Tonal adjustment parameters.
///
/// Validated once per request; the pipeline never sees out-of-range
/// values, so the contrast factor can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjustments {
    /// Additive brightness, [-255, 255].
    pub brightness: i32,
    /// Contrast, (-255, 255) exclusive.
    pub contrast: i32,
    /// Saturation percentage, >= -100. 0 is identity, -100 is grayscale.
    pub saturation: i32,
}

impl Adjustments {
    pub fn new(brightness: i32, contrast: i32, saturation: i32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
    }

    /// Check all parameters are in range.
    pub fn validate(&self) -> Result<()> {
        if !(-255..=255).contains(&self.brightness) {
            return Err(PixlError::InvalidParameter {
                message: format!("Brightness must be in [-255, 255], got {}", self.brightness),
                help: None,
            });
        }
        if self.contrast <= -255 || self.contrast >= 255 {
            return Err(PixlError::InvalidParameter {
                message: format!(
                    "Contrast must be strictly between -255 and 255, got {}",
                    self.contrast
                ),
                help: Some("The contrast curve is undefined at the endpoints".to_string()),
            });
        }
        if self.saturation < -100 {
            return Err(PixlError::InvalidParameter {
                message: format!("Saturation must be at least -100, got {}", self.saturation),
                help: None,
            });
        }
        Ok(())
    }

    /// True when all three adjustments are the identity.
    pub fn is_identity(&self) -> bool {
        self.brightness == 0 && self.contrast == 0 && self.saturation == 0
    }

    /// The contrast nonlinearity factor.
    ///
    /// Reduces to 1.0 at contrast 0. Only meaningful after `validate`.
    pub fn contrast_factor(&self) -> f32 {
        let c = self.contrast as f32;
        (259.0 * (c + 255.0)) / (255.0 * (259.0 - c))
    }

    /// The saturation interpolation factor (1.0 at saturation 0).
    pub fn saturation_factor(&self) -> f32 {
        1.0 + self.saturation as f32 / 100.0
    }
}

/// One immutable conversion request.
///
/// Carries everything the pipeline needs apart from the source buffer
/// itself, so there is no module-level state between conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub adjustments: Adjustments,
    pub palette: PaletteSpec,
    /// Number of palette entries, >= 1.
    pub colour_count: usize,
    /// Dither intensity as a percentage, [0, 100].
    pub dither: u32,
}

impl ConversionRequest {
    /// Check all parameters are in range.
    pub fn validate(&self) -> Result<()> {
        self.adjustments.validate()?;
        if self.colour_count < 1 {
            return Err(PixlError::InvalidParameter {
                message: format!("Colour count must be at least 1, got {}", self.colour_count),
                help: None,
            });
        }
        if self.dither > 100 {
            return Err(PixlError::InvalidParameter {
                message: format!("Dither intensity must be in [0, 100], got {}", self.dither),
                help: None,
            });
        }
        Ok(())
    }

    /// Dither intensity mapped to [0.0, 1.0].
    pub fn dither_intensity(&self) -> f32 {
        self.dither as f32 / 100.0
    }
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            adjustments: Adjustments::default(),
            palette: PaletteSpec::parse("standard"),
            colour_count: 16,
            dither: 0,
        }
    }
}
