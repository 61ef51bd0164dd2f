//! Core domain types for pixl.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB colour values
//! - `Palette` - Ordered colour lists, built-in tables, image extraction
//! - `Adjustments` / `ConversionRequest` - Per-conversion parameters

mod colour;
mod palette;
mod params;

pub use colour::Colour;
pub use palette::{Builtin, Palette, PaletteSpec, ResolvedPalette};
pub use params::{Adjustments, ConversionRequest};
