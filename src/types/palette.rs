//! Palette type, built-in tables, and palette resolution.
//!
//! A palette is an ordered list of colours. Nine built-in tables ship with
//! the tool; a palette can also be derived from a source image by stride
//! sampling with near-duplicate rejection. Tables are hand-ordered with the
//! most salient colours first, so truncation keeps the representative ones.

use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::error::{PixlError, Result};

use super::Colour;

/// The classic 16-colour EGA-style table, also the fallback palette.
pub const STANDARD: [Colour; 16] = [
    Colour::rgb(0, 0, 0),
    Colour::rgb(0, 0, 168),
    Colour::rgb(0, 168, 0),
    Colour::rgb(0, 168, 168),
    Colour::rgb(168, 0, 0),
    Colour::rgb(168, 0, 168),
    Colour::rgb(168, 84, 0),
    Colour::rgb(168, 168, 168),
    Colour::rgb(84, 84, 84),
    Colour::rgb(84, 84, 252),
    Colour::rgb(84, 252, 84),
    Colour::rgb(84, 252, 252),
    Colour::rgb(252, 84, 84),
    Colour::rgb(252, 84, 252),
    Colour::rgb(252, 252, 84),
    Colour::rgb(252, 252, 252),
];

pub const PASTEL: [Colour; 8] = [
    Colour::rgb(255, 209, 220),
    Colour::rgb(255, 223, 184),
    Colour::rgb(255, 248, 184),
    Colour::rgb(208, 255, 184),
    Colour::rgb(184, 255, 240),
    Colour::rgb(184, 224, 255),
    Colour::rgb(216, 184, 255),
    Colour::rgb(255, 184, 252),
];

pub const VIBRANT: [Colour; 8] = [
    Colour::rgb(230, 0, 0),
    Colour::rgb(255, 100, 0),
    Colour::rgb(255, 200, 0),
    Colour::rgb(0, 180, 0),
    Colour::rgb(0, 200, 200),
    Colour::rgb(0, 100, 230),
    Colour::rgb(100, 0, 230),
    Colour::rgb(200, 0, 200),
];

pub const MONOCHROME: [Colour; 8] = [
    Colour::rgb(0, 0, 0),
    Colour::rgb(40, 40, 40),
    Colour::rgb(80, 80, 80),
    Colour::rgb(120, 120, 120),
    Colour::rgb(160, 160, 160),
    Colour::rgb(200, 200, 200),
    Colour::rgb(240, 240, 240),
    Colour::rgb(255, 255, 255),
];

pub const SEPIA: [Colour; 8] = [
    Colour::rgb(20, 10, 0),
    Colour::rgb(60, 40, 20),
    Colour::rgb(100, 80, 60),
    Colour::rgb(140, 120, 100),
    Colour::rgb(180, 160, 140),
    Colour::rgb(220, 200, 180),
    Colour::rgb(245, 230, 210),
    Colour::rgb(255, 250, 245),
];

pub const NEON: [Colour; 8] = [
    Colour::rgb(57, 255, 20),
    Colour::rgb(0, 255, 255),
    Colour::rgb(255, 20, 147),
    Colour::rgb(255, 255, 0),
    Colour::rgb(0, 0, 255),
    Colour::rgb(255, 0, 255),
    Colour::rgb(0, 255, 127),
    Colour::rgb(255, 69, 0),
];

pub const EARTH: [Colour; 8] = [
    Colour::rgb(102, 51, 0),
    Colour::rgb(153, 102, 51),
    Colour::rgb(204, 153, 102),
    Colour::rgb(153, 153, 102),
    Colour::rgb(102, 153, 102),
    Colour::rgb(51, 102, 51),
    Colour::rgb(153, 204, 153),
    Colour::rgb(235, 216, 189),
];

pub const GRAYSCALE: [Colour; 9] = [
    Colour::rgb(0, 0, 0),
    Colour::rgb(32, 32, 32),
    Colour::rgb(64, 64, 64),
    Colour::rgb(96, 96, 96),
    Colour::rgb(128, 128, 128),
    Colour::rgb(160, 160, 160),
    Colour::rgb(192, 192, 192),
    Colour::rgb(224, 224, 224),
    Colour::rgb(255, 255, 255),
];

pub const RETRO: [Colour; 10] = [
    Colour::rgb(0, 0, 0),
    Colour::rgb(85, 85, 85),
    Colour::rgb(170, 170, 170),
    Colour::rgb(255, 255, 255),
    Colour::rgb(255, 0, 0),
    Colour::rgb(0, 255, 0),
    Colour::rgb(0, 0, 255),
    Colour::rgb(255, 255, 0),
    Colour::rgb(255, 0, 255),
    Colour::rgb(0, 255, 255),
];

/// Two sampled colours closer than this on every channel count as
/// duplicates during extraction.
const EXTRACT_MIN_CHANNEL_DISTANCE: u8 = 12;

/// A built-in palette table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Standard,
    Pastel,
    Vibrant,
    Monochrome,
    Sepia,
    Neon,
    Earth,
    Grayscale,
    Retro,
}

impl Builtin {
    /// All built-ins in display order.
    pub fn all() -> [Builtin; 9] {
        [
            Builtin::Standard,
            Builtin::Pastel,
            Builtin::Vibrant,
            Builtin::Monochrome,
            Builtin::Sepia,
            Builtin::Neon,
            Builtin::Earth,
            Builtin::Grayscale,
            Builtin::Retro,
        ]
    }

    /// Look up a built-in by name.
    pub fn from_name(name: &str) -> Option<Builtin> {
        match name {
            "standard" => Some(Builtin::Standard),
            "pastel" => Some(Builtin::Pastel),
            "vibrant" => Some(Builtin::Vibrant),
            "monochrome" => Some(Builtin::Monochrome),
            "sepia" => Some(Builtin::Sepia),
            "neon" => Some(Builtin::Neon),
            "earth" => Some(Builtin::Earth),
            "grayscale" => Some(Builtin::Grayscale),
            "retro" => Some(Builtin::Retro),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Standard => "standard",
            Builtin::Pastel => "pastel",
            Builtin::Vibrant => "vibrant",
            Builtin::Monochrome => "monochrome",
            Builtin::Sepia => "sepia",
            Builtin::Neon => "neon",
            Builtin::Earth => "earth",
            Builtin::Grayscale => "grayscale",
            Builtin::Retro => "retro",
        }
    }

    /// The native colour table.
    pub fn table(self) -> &'static [Colour] {
        match self {
            Builtin::Standard => &STANDARD,
            Builtin::Pastel => &PASTEL,
            Builtin::Vibrant => &VIBRANT,
            Builtin::Monochrome => &MONOCHROME,
            Builtin::Sepia => &SEPIA,
            Builtin::Neon => &NEON,
            Builtin::Earth => &EARTH,
            Builtin::Grayscale => &GRAYSCALE,
            Builtin::Retro => &RETRO,
        }
    }
}

/// An ordered, immutable list of colours.
///
/// Order matters for lowest-index tie-breaking in the quantizer and for
/// display; a palette is built once per conversion and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Colour>,
}

impl Palette {
    /// Wrap a list of colours.
    pub fn new(entries: Vec<Colour>) -> Self {
        Self { entries }
    }

    /// Build a palette of exactly `colour_count` entries from a table.
    ///
    /// Truncates when the table is long enough; repeats cyclically when it
    /// isn't, so large requests stay deterministic.
    pub fn from_table(table: &[Colour], colour_count: usize) -> Self {
        let entries = (0..colour_count).map(|i| table[i % table.len()]).collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Colour> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[Colour] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Colour> {
        self.entries.iter()
    }
}

/// How the palette for a conversion is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSpec {
    /// One of the nine built-in tables.
    Builtin(Builtin),
    /// Sample the palette from the source image.
    DeriveFromSource,
}

impl PaletteSpec {
    /// Parse a palette name.
    ///
    /// Unknown names fall back to the standard table rather than failing,
    /// matching the default-palette behaviour.
    pub fn parse(name: &str) -> Self {
        if name == "derive-from-source" {
            return PaletteSpec::DeriveFromSource;
        }
        match Builtin::from_name(name) {
            Some(builtin) => PaletteSpec::Builtin(builtin),
            None => PaletteSpec::Builtin(Builtin::Standard),
        }
    }

    /// Resolve to a concrete palette of exactly `colour_count` entries.
    ///
    /// `DeriveFromSource` without a source image falls back to the standard
    /// table. Returns the palette plus the number of entries that had to be
    /// random-filled (nonzero only for image extraction that ran out of
    /// distinct colours).
    pub fn resolve<R: Rng>(
        self,
        colour_count: usize,
        source: Option<&PixelBuffer>,
        rng: &mut R,
    ) -> Result<ResolvedPalette> {
        if colour_count < 1 {
            return Err(PixlError::InvalidParameter {
                message: format!("Colour count must be at least 1, got {}", colour_count),
                help: None,
            });
        }

        match (self, source) {
            (PaletteSpec::DeriveFromSource, Some(buffer)) => {
                Ok(extract_from_image(buffer, colour_count, rng))
            }
            (PaletteSpec::DeriveFromSource, None) => Ok(ResolvedPalette {
                palette: Palette::from_table(&STANDARD, colour_count),
                random_fill: 0,
            }),
            (PaletteSpec::Builtin(builtin), _) => Ok(ResolvedPalette {
                palette: Palette::from_table(builtin.table(), colour_count),
                random_fill: 0,
            }),
        }
    }
}

/// A resolved palette plus its underflow count.
#[derive(Debug, Clone)]
pub struct ResolvedPalette {
    pub palette: Palette,
    /// Entries filled with random colours because the source image yielded
    /// fewer distinct colours than requested.
    pub random_fill: usize,
}

/// Sample a palette from an image buffer.
///
/// Walks the buffer at a stride of `total_pixels / colour_count` pixels
/// (minimum 1), rejecting samples whose channel deltas to every accepted
/// colour are all below the duplicate threshold. Any shortfall is filled
/// with colours drawn from `rng`.
fn extract_from_image<R: Rng>(
    buffer: &PixelBuffer,
    colour_count: usize,
    rng: &mut R,
) -> ResolvedPalette {
    let stride = (buffer.pixel_count() / colour_count).max(1);

    let mut entries: Vec<Colour> = Vec::with_capacity(colour_count);
    for px in buffer.data().chunks_exact(4).step_by(stride) {
        if entries.len() >= colour_count {
            break;
        }
        let candidate = Colour::rgb(px[0], px[1], px[2]);
        if !entries.iter().any(|c| is_near_duplicate(*c, candidate)) {
            entries.push(candidate);
        }
    }

    let random_fill = colour_count - entries.len();
    for _ in 0..random_fill {
        entries.push(Colour::rgb(rng.gen(), rng.gen(), rng.gen()));
    }

    ResolvedPalette {
        palette: Palette::new(entries),
        random_fill,
    }
}

/// True when all three channel deltas are below the duplicate threshold.
fn is_near_duplicate(a: Colour, b: Colour) -> bool {
    let limit = EXTRACT_MIN_CHANNEL_DISTANCE;
    a.r.abs_diff(b.r) < limit && a.g.abs_diff(b.g) < limit && a.b.abs_diff(b.b) < limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_builtin_from_name() {
        assert_eq!(Builtin::from_name("standard"), Some(Builtin::Standard));
        assert_eq!(Builtin::from_name("retro"), Some(Builtin::Retro));
        assert_eq!(Builtin::from_name("bogus"), None);
    }

    #[test]
    fn test_builtin_table_lengths() {
        assert_eq!(Builtin::Standard.table().len(), 16);
        assert_eq!(Builtin::Grayscale.table().len(), 9);
        assert_eq!(Builtin::Retro.table().len(), 10);
        for builtin in Builtin::all() {
            let len = builtin.table().len();
            assert!((8..=16).contains(&len), "{}: {}", builtin.name(), len);
        }
    }

    #[test]
    fn test_resolve_standard_16_exact() {
        let resolved = PaletteSpec::parse("standard")
            .resolve(16, None, &mut rng())
            .unwrap();
        assert_eq!(resolved.palette.entries(), &STANDARD);
        assert_eq!(resolved.random_fill, 0);
    }

    #[test]
    fn test_resolve_truncates() {
        let resolved = PaletteSpec::parse("standard")
            .resolve(4, None, &mut rng())
            .unwrap();
        assert_eq!(resolved.palette.entries(), &STANDARD[..4]);
    }

    #[test]
    fn test_resolve_cyclic_repeat() {
        let resolved = PaletteSpec::parse("standard")
            .resolve(20, None, &mut rng())
            .unwrap();
        let palette = &resolved.palette;
        assert_eq!(palette.len(), 20);
        assert_eq!(palette.get(16), palette.get(0));
        assert_eq!(palette.get(19), palette.get(3));
    }

    #[test]
    fn test_resolve_unknown_name_falls_back_to_standard() {
        let resolved = PaletteSpec::parse("does-not-exist")
            .resolve(16, None, &mut rng())
            .unwrap();
        assert_eq!(resolved.palette.entries(), &STANDARD);
    }

    #[test]
    fn test_resolve_zero_count_rejected() {
        let result = PaletteSpec::parse("standard").resolve(0, None, &mut rng());
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_without_source_falls_back() {
        let resolved = PaletteSpec::DeriveFromSource
            .resolve(8, None, &mut rng())
            .unwrap();
        assert_eq!(resolved.palette.entries(), &STANDARD[..8]);
        assert_eq!(resolved.random_fill, 0);
    }

    #[test]
    fn test_extract_distinct_colours() {
        // Four well-separated colours in a 2x2 image.
        let data = vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 0, 255,
        ];
        let buffer = PixelBuffer::from_raw(2, 2, data).unwrap();

        let resolved = PaletteSpec::DeriveFromSource
            .resolve(4, Some(&buffer), &mut rng())
            .unwrap();

        assert_eq!(resolved.random_fill, 0);
        assert_eq!(resolved.palette.get(0), Some(Colour::rgb(255, 0, 0)));
        assert_eq!(resolved.palette.len(), 4);
    }

    #[test]
    fn test_extract_rejects_near_duplicates() {
        // All pixels within the duplicate threshold of each other.
        let data = vec![
            100, 100, 100, 255, //
            105, 103, 101, 255, //
            108, 108, 108, 255, //
            102, 111, 104, 255,
        ];
        let buffer = PixelBuffer::from_raw(2, 2, data).unwrap();

        let resolved = PaletteSpec::DeriveFromSource
            .resolve(4, Some(&buffer), &mut rng())
            .unwrap();

        // Only the first sample is distinct; the rest are random-filled.
        assert_eq!(resolved.random_fill, 3);
        assert_eq!(resolved.palette.len(), 4);
    }

    #[test]
    fn test_extract_accepted_entries_pairwise_distinct() {
        // Four well-separated colours interleaved with near-duplicates of
        // two of them. Extraction keeps the four and fills the shortfall.
        let data = vec![
            255, 0, 0, 255, //
            250, 5, 5, 255, // near-duplicate of red
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            5, 2, 250, 255, // near-duplicate of blue
            255, 255, 0, 255,
        ];
        let buffer = PixelBuffer::from_raw(3, 2, data).unwrap();

        let resolved = PaletteSpec::DeriveFromSource
            .resolve(6, Some(&buffer), &mut rng())
            .unwrap();

        assert_eq!(resolved.random_fill, 2);
        assert_eq!(
            &resolved.palette.entries()[..4],
            &[
                Colour::rgb(255, 0, 0),
                Colour::rgb(0, 255, 0),
                Colour::rgb(0, 0, 255),
                Colour::rgb(255, 255, 0),
            ]
        );

        // Accepted (non-filled) entries must be pairwise distinct.
        let accepted = &resolved.palette.entries()[..4];
        for (i, a) in accepted.iter().enumerate() {
            for b in &accepted[i + 1..] {
                assert!(!is_near_duplicate(*a, *b));
            }
        }
    }

    #[test]
    fn test_extract_seeded_rng_is_deterministic() {
        let buffer = PixelBuffer::from_raw(1, 1, vec![10, 20, 30, 255]).unwrap();

        let a = PaletteSpec::DeriveFromSource
            .resolve(5, Some(&buffer), &mut StdRng::seed_from_u64(7))
            .unwrap();
        let b = PaletteSpec::DeriveFromSource
            .resolve(5, Some(&buffer), &mut StdRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(a.palette, b.palette);
        assert_eq!(a.random_fill, 4);
    }

    #[test]
    fn test_extract_stride_minimum_one() {
        // More colours requested than pixels: stride clamps to 1 and every
        // pixel gets sampled.
        let data = vec![
            255, 0, 0, 255, //
            0, 255, 0, 255,
        ];
        let buffer = PixelBuffer::from_raw(2, 1, data).unwrap();

        let resolved = PaletteSpec::DeriveFromSource
            .resolve(8, Some(&buffer), &mut rng())
            .unwrap();

        assert_eq!(resolved.palette.get(0), Some(Colour::rgb(255, 0, 0)));
        assert_eq!(resolved.palette.get(1), Some(Colour::rgb(0, 255, 0)));
        assert_eq!(resolved.random_fill, 6);
    }

    #[test]
    fn test_from_table_single_entry() {
        let palette = Palette::from_table(&GRAYSCALE, 1);
        assert_eq!(palette.entries(), &[Colour::BLACK]);
    }
}
