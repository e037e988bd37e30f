//! Text rendering
//!
//! Two independent glyph sources, both drawing into a
//! [`FrameBuffer`](crate::framebuffer::FrameBuffer) at a [`Cursor`]:
//!
//! - [`fixed`] - fixed-width, column-major bitmap fonts such as [`FONT_5X7`],
//!   scalable by an integer factor
//! - [`hex`] - GNU Unifont `.hex` fonts with a per-string [`GlyphCache`]

pub mod fixed;
pub mod hex;

pub use fixed::{FONT_5X7, FixedFont};
pub use hex::{CachedGlyph, GlyphCache, HexFont, HexGlyph};

/// Text insertion point, in pixels
///
/// Advanced automatically after every glyph drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Left edge of the next glyph
    pub x: i32,
    /// Top edge of the next glyph
    pub y: i32,
}

impl Cursor {
    /// Create a cursor at the given position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
