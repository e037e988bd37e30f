//! Packed 4-bit grayscale framebuffer
//!
//! Every byte holds two horizontally adjacent pixels: the even pixel in the
//! high nibble, the odd pixel in the low nibble. A row is
//! `2 * horizontal_chunks` bytes long, which matches the order the SSD1322
//! expects pixel data in after a write-RAM command.
//!
//! ## Example
//!
//! ```
//! use ssd1322::{Dimensions, FrameBuffer};
//!
//! let mut fb = FrameBuffer::new(Dimensions::default());
//! fb.set_pixel(0, 0, 0xF);
//! fb.set_pixel(1, 0, 0x3);
//! assert_eq!(fb.as_bytes()[0], 0xF3);
//! assert_eq!(fb.pixel(1, 0), Some(0x3));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::config::Dimensions;

/// Highest gray level a pixel can hold
pub const MAX_GRAY_LEVEL: u8 = 0x0F;

/// Pixel store for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    dimensions: Dimensions,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    /// Create a zeroed framebuffer for the given geometry
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            buffer: vec![0; dimensions.buffer_size()],
        }
    }

    /// Geometry this buffer was sized for
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    pub fn width(&self) -> i32 {
        self.dimensions.width as i32
    }

    /// Height in pixels
    pub fn height(&self) -> i32 {
        self.dimensions.height as i32
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((x >> 1) + self.dimensions.horizontal_chunks() * 2 * y)
    }

    /// Set one pixel to a gray level
    ///
    /// Coordinates outside the panel are ignored. `gray` is masked to its low
    /// nibble; the other pixel sharing the byte is left untouched.
    pub fn set_pixel(&mut self, x: i32, y: i32, gray: u8) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let gray = gray & MAX_GRAY_LEVEL;
        let byte = &mut self.buffer[index];
        *byte = if x & 1 == 0 {
            (*byte & 0x0F) | (gray << 4)
        } else {
            (*byte & 0xF0) | gray
        };
    }

    /// Read one pixel back, `None` outside the panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        let byte = self.buffer[self.index(x, y)?];
        Some(if x & 1 == 0 { byte >> 4 } else { byte & 0x0F })
    }

    /// The two bytes (4 pixels) behind one panel column address
    ///
    /// `None` outside the panel.
    pub(crate) fn column_group(&self, x: i32, y: i32) -> Option<[u8; 2]> {
        let index = self.index(x & !0x03, y)?;
        Some([self.buffer[index], self.buffer[index + 1]])
    }

    /// Fill every pixel with gray level 0
    pub fn clear(&mut self) {
        self.buffer.fill(0x00);
    }

    /// Fill every pixel with one gray level
    pub fn fill(&mut self, gray: u8) {
        let gray = gray & MAX_GRAY_LEVEL;
        self.buffer.fill((gray << 4) | gray);
    }

    /// Copy of the current contents, safe to transmit while drawing continues
    pub fn snapshot(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    /// Raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> FrameBuffer {
        FrameBuffer::new(Dimensions::new(8, 4).unwrap())
    }

    #[test]
    fn test_buffer_size_matches_geometry() {
        let fb = FrameBuffer::new(Dimensions::default());
        assert_eq!(fb.as_bytes().len(), 256 / 2 * 64);
    }

    #[test]
    fn test_even_pixel_uses_high_nibble() {
        let mut fb = small();
        fb.set_pixel(2, 1, 0xA);
        assert_eq!(fb.as_bytes()[1 + 4], 0xA0);
    }

    #[test]
    fn test_odd_pixel_uses_low_nibble() {
        let mut fb = small();
        fb.set_pixel(3, 1, 0x5);
        assert_eq!(fb.as_bytes()[1 + 4], 0x05);
    }

    #[test]
    fn test_neighbour_nibble_preserved() {
        let mut fb = small();
        fb.set_pixel(4, 2, 0xC);
        fb.set_pixel(5, 2, 0x3);
        fb.set_pixel(4, 2, 0x1);
        assert_eq!(fb.pixel(4, 2), Some(0x1));
        assert_eq!(fb.pixel(5, 2), Some(0x3));
    }

    #[test]
    fn test_gray_level_is_masked() {
        let mut fb = small();
        fb.set_pixel(0, 0, 0x1F);
        assert_eq!(fb.pixel(0, 0), Some(0xF));
        assert_eq!(fb.pixel(1, 0), Some(0));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = small();
        let before = fb.clone();
        fb.set_pixel(-1, 0, 0xF);
        fb.set_pixel(0, -1, 0xF);
        fb.set_pixel(8, 0, 0xF);
        fb.set_pixel(0, 4, 0xF);
        assert_eq!(fb, before);
        assert_eq!(fb.pixel(8, 0), None);
    }

    #[test]
    fn test_column_group_covers_four_pixels() {
        let mut fb = small();
        fb.set_pixel(4, 0, 0x1);
        fb.set_pixel(5, 0, 0x2);
        fb.set_pixel(6, 0, 0x3);
        fb.set_pixel(7, 0, 0x4);
        assert_eq!(fb.column_group(6, 0), Some([0x12, 0x34]));
        assert_eq!(fb.column_group(8, 0), None);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut fb = small();
        fb.fill(0x7);
        assert!(fb.as_bytes().iter().all(|&b| b == 0x77));
        fb.clear();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut fb = small();
        fb.set_pixel(0, 0, 0xF);
        let frame = fb.snapshot();
        fb.set_pixel(0, 0, 0x0);
        assert_eq!(frame[0], 0xF0);
        assert_eq!(fb.as_bytes()[0], 0x00);
    }
}
