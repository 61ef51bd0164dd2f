//! Image decoding, resizing, and PNG export.
//!
//! This is the boundary between the pipeline (which only sees pixel
//! buffers) and image files on disk.

mod png;
mod source;

pub use png::write_png;
pub use source::{load_image, resize_to_width};
