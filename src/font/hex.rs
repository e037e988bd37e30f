//! GNU Unifont `.hex` fonts
//!
//! A hex font file has one glyph per line: four hex digits of code point, a
//! separator, then the bitmap as hex digits. A 64-digit bitmap is a 16-pixel
//! wide glyph (4 digits per row); anything else is 8 pixels wide (2 digits
//! per row).
//!
//! Rendering goes through a [`GlyphCache`] built for the string about to be
//! drawn, so the hex-to-pixel expansion happens once per distinct character.
//!
//! ## Example
//!
//! ```
//! use ssd1322::font::{hex, Cursor, GlyphCache, HexFont};
//! use ssd1322::{Dimensions, FrameBuffer};
//!
//! let font = HexFont::parse("0041:0000000018242442427E424242420000\n");
//! let cache = GlyphCache::build(&font, "AA");
//! assert_eq!(cache.string_width("AA"), 16);
//!
//! let mut fb = FrameBuffer::new(Dimensions::default());
//! let mut cursor = Cursor::default();
//! hex::write_string(&mut fb, &mut cursor, &font, &cache, "AA", 0xF);
//! assert_eq!(cursor.x, 16);
//! ```

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::Cursor;
use crate::framebuffer::FrameBuffer;

#[cfg(feature = "std")]
use crate::error::FontError;

/// Payload length that selects 16-pixel wide rows
const WIDE_PAYLOAD_LEN: usize = 64;

/// Raw glyph as read from the font file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexGlyph {
    rows: Vec<u16>,
    size: u8,
}

impl HexGlyph {
    /// Row bitmaps, top row first, MSB leftmost
    pub fn rows(&self) -> &[u16] {
        &self.rows
    }

    /// Declared size: 16 for 64-digit payloads, 8 otherwise
    ///
    /// This is also the bit width of every row.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    fn parse(payload: &str) -> Option<Self> {
        if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let (digits, size) = if payload.len() == WIDE_PAYLOAD_LEN {
            (4, 16)
        } else {
            (2, 8)
        };
        let rows = payload
            .as_bytes()
            .chunks(digits)
            .map(|chunk| {
                let chunk = core::str::from_utf8(chunk).ok()?;
                u16::from_str_radix(chunk, 16).ok()
            })
            .collect::<Option<Vec<u16>>>()?;
        Some(Self { rows, size })
    }
}

/// Glyphs of a loaded hex font, keyed by code point
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HexFont {
    glyphs: BTreeMap<u32, HexGlyph>,
}

impl HexFont {
    /// Parse the text of a hex font
    ///
    /// Lines whose code point is missing, not hex, or zero are skipped, as are
    /// lines with an empty or non-hex bitmap.
    pub fn parse(text: &str) -> Self {
        let glyphs: BTreeMap<u32, HexGlyph> = text.lines().filter_map(parse_line).collect();
        log::debug!("parsed hex font with {} glyphs", glyphs.len());
        Self { glyphs }
    }

    /// Read and parse a hex font file
    ///
    /// # Errors
    ///
    /// Returns `FontError::Io` if the file cannot be read.
    #[cfg(feature = "std")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, FontError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).inspect_err(|e| {
            log::error!("error loading font {}: {e}", path.display());
        })?;
        Ok(Self::parse(&text))
    }

    /// Raw glyph for a character
    pub fn glyph(&self, c: char) -> Option<&HexGlyph> {
        self.glyphs.get(&(c as u32))
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the font has no glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(u32, HexGlyph)> {
    let line = line.trim_end_matches('\r');
    let code = line
        .get(..4)
        .filter(|code| code.bytes().all(|b| b.is_ascii_hexdigit()))
        .and_then(|code| u32::from_str_radix(code, 16).ok())
        .filter(|&code| code != 0)?;
    let glyph = HexGlyph::parse(line.get(5..)?)?;
    Some((code, glyph))
}

/// Glyph expanded to individual pixels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedGlyph {
    pixels: Vec<bool>,
    width: usize,
    height: usize,
}

impl CachedGlyph {
    fn expand(glyph: &HexGlyph) -> Self {
        let width = glyph.size() as usize;
        let mut pixels = Vec::with_capacity(width * glyph.height());
        for &row in glyph.rows() {
            pixels.extend((0..width).rev().map(|bit| (row >> bit) & 1 == 1));
        }
        Self {
            pixels,
            width,
            height: glyph.height(),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at `(col, row)` is on
    pub fn is_on(&self, col: usize, row: usize) -> bool {
        col < self.width && self.pixels.get(row * self.width + col) == Some(&true)
    }
}

/// Expanded glyphs for the characters of one string
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphCache {
    glyphs: BTreeMap<char, CachedGlyph>,
}

impl GlyphCache {
    /// Expand every distinct character of `text`
    ///
    /// Characters the font lacks are left out with a warning.
    pub fn build(font: &HexFont, text: &str) -> Self {
        let mut glyphs = BTreeMap::new();
        for c in text.chars() {
            if glyphs.contains_key(&c) {
                continue;
            }
            match font.glyph(c) {
                Some(glyph) => {
                    glyphs.insert(c, CachedGlyph::expand(glyph));
                }
                None => log::warn!("character {c:?} not found in font"),
            }
        }
        Self { glyphs }
    }

    /// Cached glyph for a character
    pub fn get(&self, c: char) -> Option<&CachedGlyph> {
        self.glyphs.get(&c)
    }

    /// Number of cached glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Total advance of `text` over the cached glyphs
    ///
    /// Characters without a cached glyph count as zero width.
    pub fn string_width(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|c| self.get(c))
            .map(|glyph| glyph.width() as u32)
            .sum()
    }
}

/// Draw one cached glyph at `(x, y)`, painting off pixels with gray level 0
pub fn draw_glyph(fb: &mut FrameBuffer, glyph: &CachedGlyph, x: i32, y: i32, gray: u8) {
    for row in 0..glyph.height() {
        for col in 0..glyph.width() {
            let level = if glyph.is_on(col, row) { gray } else { 0 };
            fb.set_pixel(x + col as i32, y + row as i32, level);
        }
    }
}

/// Draw a string with a hex font at the cursor and advance it
///
/// The cache must have been built for this text: if any character the font
/// has is missing from the cache nothing is drawn. Characters the font lacks
/// are skipped with a warning. Drawing stops once the cursor reaches the right
/// edge of the panel; there is no wrapping.
pub fn write_string(
    fb: &mut FrameBuffer,
    cursor: &mut Cursor,
    font: &HexFont,
    cache: &GlyphCache,
    text: &str,
    gray: u8,
) {
    if let Some(c) = text
        .chars()
        .find(|&c| cache.get(c).is_none() && font.glyph(c).is_some())
    {
        log::warn!("glyph for {c:?} not cached, call cache_glyphs() first");
        return;
    }

    for c in text.chars() {
        let Some(glyph) = cache.get(c) else {
            log::warn!("character {c:?} not found in cached glyphs");
            continue;
        };
        if cursor.x >= fb.width() {
            return;
        }
        draw_glyph(fb, glyph, cursor.x, cursor.y, gray);
        cursor.x += glyph.width() as i32;
    }
}
