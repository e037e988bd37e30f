//! Fixed-width bitmap fonts
//!
//! Glyphs are stored column-major: each byte is one column, bit 0 is the top
//! row. A font is an alphabet string plus `width` bytes per character, in the
//! same order as the alphabet.
//!
//! ## Example
//!
//! ```
//! use ssd1322::font::{fixed, Cursor, FONT_5X7};
//! use ssd1322::{Dimensions, FrameBuffer};
//!
//! let mut fb = FrameBuffer::new(Dimensions::default());
//! let mut cursor = Cursor::new(0, 0);
//! fixed::write_string(&mut fb, &mut cursor, &FONT_5X7, 1, "Hi", 0xF);
//! assert_eq!(cursor.x, 12);
//! ```

use super::Cursor;
use crate::framebuffer::FrameBuffer;
use crate::render::{draw_pixel, fill_rect};

/// Fixed-width, column-major bitmap font
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedFont {
    /// Characters covered, in data order
    pub lookup: &'static str,
    /// `width` column bytes per character
    pub data: &'static [u8],
    /// Columns per glyph
    pub width: u8,
    /// Rows per glyph, at most 8
    pub height: u8,
}

impl FixedFont {
    /// Column bytes of a character, `None` if the font lacks it
    pub fn glyph(&self, c: char) -> Option<&'static [u8]> {
        let position = self.lookup.chars().position(|l| l == c)?;
        let start = position * self.width as usize;
        self.data.get(start..start + self.width as usize)
    }

    /// Horizontal advance of one glyph at a scale factor
    ///
    /// Zero at `size == 0`, where glyphs draw nothing.
    pub fn advance(&self, size: u8) -> i32 {
        let size = i32::from(size);
        i32::from(self.width) * size + size
    }
}

/// Draw one glyph's columns at `(x, y)`
///
/// Only set bits are painted; pixels under clear bits keep their value. The
/// low `rows` bits of each column are used, at most 8. Nothing is drawn at
/// `size == 0`.
pub fn draw_glyph(
    fb: &mut FrameBuffer,
    columns: &[u8],
    rows: u8,
    x: i32,
    y: i32,
    size: u8,
    gray: u8,
) {
    let size = i32::from(size);
    if size == 0 {
        return;
    }
    for (i, &column) in (0i32..).zip(columns) {
        for j in 0..i32::from(rows.min(8)) {
            if (column >> j) & 1 == 0 {
                continue;
            }
            let px = x.saturating_add(i * size);
            let py = y.saturating_add(j * size);
            if size == 1 {
                draw_pixel(fb, px, py, gray);
            } else {
                fill_rect(fb, px, py, size, size, gray);
            }
        }
    }
}

/// Draw a string at the cursor and advance it
///
/// Characters missing from the font are skipped with a warning and do not
/// move the cursor. Every drawn glyph moves the cursor right by
/// `width * size + size`, stopping at `i32::MAX`.
pub fn write_string(
    fb: &mut FrameBuffer,
    cursor: &mut Cursor,
    font: &FixedFont,
    size: u8,
    text: &str,
    gray: u8,
) {
    for c in text.chars() {
        let Some(columns) = font.glyph(c) else {
            log::warn!("character {c:?} not found in font");
            continue;
        };
        draw_glyph(fb, columns, font.height, cursor.x, cursor.y, size, gray);
        cursor.x = cursor.x.saturating_add(font.advance(size));
    }
}

/// Classic 5x7 ASCII font covering `' '..='~'`
pub const FONT_5X7: FixedFont = FixedFont {
    lookup: " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~",
    data: &FONT_5X7_DATA,
    width: 5,
    height: 8,
};

#[rustfmt::skip]
const FONT_5X7_DATA: [u8; 95 * 5] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x5F, 0x00, 0x00, // '!'
    0x00, 0x07, 0x00, 0x07, 0x00, // '"'
    0x14, 0x7F, 0x14, 0x7F, 0x14, // '#'
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // '$'
    0x23, 0x13, 0x08, 0x64, 0x62, // '%'
    0x36, 0x49, 0x56, 0x20, 0x50, // '&'
    0x00, 0x08, 0x07, 0x03, 0x00, // '''
    0x00, 0x1C, 0x22, 0x41, 0x00, // '('
    0x00, 0x41, 0x22, 0x1C, 0x00, // ')'
    0x2A, 0x1C, 0x7F, 0x1C, 0x2A, // '*'
    0x08, 0x08, 0x3E, 0x08, 0x08, // '+'
    0x00, 0x80, 0x70, 0x30, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x00, 0x60, 0x60, 0x00, // '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x3E, 0x51, 0x49, 0x45, 0x3E, // '0'
    0x00, 0x42, 0x7F, 0x40, 0x00, // '1'
    0x72, 0x49, 0x49, 0x49, 0x46, // '2'
    0x21, 0x41, 0x49, 0x4D, 0x33, // '3'
    0x18, 0x14, 0x12, 0x7F, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3C, 0x4A, 0x49, 0x49, 0x31, // '6'
    0x41, 0x21, 0x11, 0x09, 0x07, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x46, 0x49, 0x49, 0x29, 0x1E, // '9'
    0x00, 0x00, 0x14, 0x00, 0x00, // ':'
    0x00, 0x40, 0x34, 0x00, 0x00, // ';'
    0x00, 0x08, 0x14, 0x22, 0x41, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x02, 0x01, 0x59, 0x09, 0x06, // '?'
    0x3E, 0x41, 0x5D, 0x59, 0x4E, // '@'
    0x7C, 0x12, 0x11, 0x12, 0x7C, // 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7F, 0x41, 0x41, 0x41, 0x3E, // 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7F, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3E, 0x41, 0x41, 0x51, 0x73, // 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    0x00, 0x41, 0x7F, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7F, 0x02, 0x1C, 0x02, 0x7F, // 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x26, 0x49, 0x49, 0x49, 0x32, // 'S'
    0x03, 0x01, 0x7F, 0x01, 0x03, // 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    0x3F, 0x40, 0x38, 0x40, 0x3F, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x03, 0x04, 0x78, 0x04, 0x03, // 'Y'
    0x61, 0x59, 0x49, 0x4D, 0x43, // 'Z'
    0x00, 0x7F, 0x41, 0x41, 0x41, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\'
    0x00, 0x41, 0x41, 0x41, 0x7F, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x03, 0x07, 0x08, 0x00, // '`'
    0x20, 0x54, 0x54, 0x78, 0x40, // 'a'
    0x7F, 0x28, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x28, // 'c'
    0x38, 0x44, 0x44, 0x28, 0x7F, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x00, 0x08, 0x7E, 0x09, 0x02, // 'f'
    0x18, 0xA4, 0xA4, 0x9C, 0x78, // 'g'
    0x7F, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7D, 0x40, 0x00, // 'i'
    0x20, 0x40, 0x40, 0x3D, 0x00, // 'j'
    0x7F, 0x10, 0x28, 0x44, 0x00, // 'k'
    0x00, 0x41, 0x7F, 0x40, 0x00, // 'l'
    0x7C, 0x04, 0x78, 0x04, 0x78, // 'm'
    0x7C, 0x08, 0x04, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    0xFC, 0x18, 0x24, 0x24, 0x18, // 'p'
    0x18, 0x24, 0x24, 0x18, 0xFC, // 'q'
    0x7C, 0x08, 0x04, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x54, 0x24, // 's'
    0x04, 0x04, 0x3F, 0x44, 0x24, // 't'
    0x3C, 0x40, 0x40, 0x20, 0x7C, // 'u'
    0x1C, 0x20, 0x40, 0x20, 0x1C, // 'v'
    0x3C, 0x40, 0x30, 0x40, 0x3C, // 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    0x4C, 0x90, 0x90, 0x90, 0x7C, // 'y'
    0x44, 0x64, 0x54, 0x4C, 0x44, // 'z'
    0x00, 0x08, 0x36, 0x41, 0x00, // '{'
    0x00, 0x00, 0x7F, 0x00, 0x00, // '|'
    0x00, 0x41, 0x36, 0x08, 0x00, // '}'
    0x02, 0x01, 0x02, 0x04, 0x02, // '~'
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;

    fn fb() -> FrameBuffer {
        FrameBuffer::new(Dimensions::new(64, 32).unwrap())
    }

    #[test]
    fn test_lookup_matches_data_length() {
        assert_eq!(
            FONT_5X7.lookup.chars().count() * FONT_5X7.width as usize,
            FONT_5X7.data.len()
        );
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(FONT_5X7.glyph('!'), Some(&[0x00, 0x00, 0x5F, 0x00, 0x00][..]));
        assert_eq!(FONT_5X7.glyph('~'), Some(&[0x02, 0x01, 0x02, 0x04, 0x02][..]));
        assert_eq!(FONT_5X7.glyph('\u{e9}'), None);
    }

    #[test]
    fn test_draw_glyph_column_major_lsb_top() {
        let mut fb = fb();
        draw_glyph(&mut fb, &[0b0000_0101], 8, 2, 3, 1, 0xF);
        assert_eq!(fb.pixel(2, 3), Some(0xF));
        assert_eq!(fb.pixel(2, 4), Some(0));
        assert_eq!(fb.pixel(2, 5), Some(0xF));
    }

    #[test]
    fn test_clear_bits_do_not_erase() {
        let mut fb = fb();
        fb.set_pixel(0, 1, 0x9);
        draw_glyph(&mut fb, &[0b0000_0001], 8, 0, 0, 1, 0xF);
        assert_eq!(fb.pixel(0, 0), Some(0xF));
        assert_eq!(fb.pixel(0, 1), Some(0x9));
    }

    #[test]
    fn test_scaled_glyph_fills_squares() {
        let mut fb = fb();
        draw_glyph(&mut fb, &[0b0000_0010], 8, 0, 0, 3, 0x7);
        for y in 0..6 {
            for x in 0..3 {
                let expected = if (3..6).contains(&y) { 0x7 } else { 0 };
                assert_eq!(fb.pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_cursor_advance_per_character() {
        let mut fb = fb();
        let mut cursor = Cursor::new(1, 0);
        write_string(&mut fb, &mut cursor, &FONT_5X7, 2, "ab", 0xF);
        assert_eq!(cursor.x, 1 + 2 * (5 * 2 + 2));
        assert_eq!(cursor.y, 0);
    }

    #[test]
    fn test_missing_characters_do_not_advance() {
        let mut fb = fb();
        let mut cursor = Cursor::default();
        write_string(&mut fb, &mut cursor, &FONT_5X7, 1, "a\u{2603}b", 0xF);
        assert_eq!(cursor.x, 2 * 6);
    }

    #[test]
    fn test_zero_size_draws_nothing_and_does_not_advance() {
        let mut fb = fb();
        let mut cursor = Cursor::new(3, 2);
        write_string(&mut fb, &mut cursor, &FONT_5X7, 0, "AB", 0xF);
        assert_eq!(FONT_5X7.advance(0), 0);
        assert_eq!(cursor, Cursor::new(3, 2));
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_font_height_limits_rows() {
        const SHORT: FixedFont = FixedFont {
            lookup: "#",
            data: &[0xFF],
            width: 1,
            height: 3,
        };
        let mut fb = fb();
        let mut cursor = Cursor::default();
        write_string(&mut fb, &mut cursor, &SHORT, 1, "#", 0xF);
        assert!((0..3).all(|y| fb.pixel(0, y) == Some(0xF)));
        assert!((3..8).all(|y| fb.pixel(0, y) == Some(0)));
        assert_eq!(cursor.x, 2);
    }

    #[test]
    fn test_text_near_i32_limits() {
        let mut fb = fb();
        let mut cursor = Cursor::new(i32::MAX - 3, 0);
        write_string(&mut fb, &mut cursor, &FONT_5X7, 1, "A", 0xF);
        assert_eq!(cursor.x, i32::MAX);

        let mut cursor = Cursor::new(i32::MAX - 3, i32::MAX - 3);
        write_string(&mut fb, &mut cursor, &FONT_5X7, 255, "AW", 0xF);
        draw_glyph(&mut fb, &[0xFF; 5], 8, i32::MIN, i32::MIN, 255, 0xF);
        assert_eq!(cursor.x, i32::MAX);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }
}
