//! Core display operations

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::command::{
    COMMAND_UNLOCK, DEFAULT_GRAYSCALE_TABLE, DISPLAY_INVERT, DISPLAY_NORMAL, DISPLAY_OFF,
    DISPLAY_ON, ENABLE_GRAYSCALE_TABLE, SET_CLOCK_DIVIDER, SET_COLUMN_ADDRESS, SET_COMMAND_LOCK,
    SET_CONTRAST_CURRENT, SET_DISPLAY_OFFSET, SET_ENHANCEMENT_A, SET_ENHANCEMENT_B, SET_GPIO,
    SET_MASTER_CONTRAST, SET_MUX_RATIO, SET_PHASE_LENGTH, SET_PRECHARGE_VOLTAGE, SET_REMAP,
    SET_ROW_ADDRESS, SET_SECOND_PRECHARGE, SET_START_LINE, SET_VCOMH, SET_VDD_SOURCE, WRITE_RAM,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::font::{Cursor, FixedFont, GlyphCache, HexFont, fixed, hex};
use crate::framebuffer::{FrameBuffer, MAX_GRAY_LEVEL};
use crate::interface::DisplayInterface;
use crate::logo::Logo;
use crate::render;
use crate::sequence::Sequence;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Lifecycle of the controller as seen by the driver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Created, nothing sent yet (or reset without re-initialization)
    #[default]
    Uninitialized,
    /// Reset line is being pulsed
    Resetting,
    /// Initialization sequence is being sent
    Initializing,
    /// Initialized with the panel on
    Ready,
    /// Initialized with the panel switched off
    PoweredOff,
}

/// Outcome of [`Display::update`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The frame was streamed to the panel
    Sent,
    /// Another frame was still in flight; nothing was sent
    Coalesced,
}

/// Frame snapshot taken by [`Display::begin_update`]
///
/// Must be handed back to [`Display::finish_update`], otherwise every later
/// update is coalesced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct PendingFrame {
    frame: Vec<u8>,
}

impl PendingFrame {
    /// Packed pixel bytes captured at snapshot time
    pub fn as_bytes(&self) -> &[u8] {
        &self.frame
    }
}

/// Core display driver for SSD1322
///
/// Owns the framebuffer, the text cursor, the loaded hex font and its glyph
/// cache. Drawing only touches the framebuffer; [`update`](Self::update)
/// pushes it to the panel.
///
/// Once [`begin`](Self::begin) has run, dropping the display blanks the
/// panel unless [`disarm_teardown`](Self::disarm_teardown) was called.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    framebuffer: FrameBuffer,
    cursor: Cursor,
    state: DisplayState,
    update_in_flight: bool,
    hex_font: Option<HexFont>,
    glyph_cache: Option<GlyphCache>,
    teardown_armed: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`begin`](Self::begin) or
    /// [`reset`](Self::reset).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            framebuffer: FrameBuffer::new(config.dimensions),
            config,
            cursor: Cursor::default(),
            state: DisplayState::Uninitialized,
            update_in_flight: false,
            hex_font: None,
            glyph_cache: None,
            teardown_armed: false,
        }
    }

    /// Pulse the hardware reset line
    ///
    /// The controller forgets its configuration, so the display goes back to
    /// `Uninitialized`.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.state = DisplayState::Resetting;
        self.interface.reset(delay).map_err(Error::Interface)?;
        self.state = DisplayState::Uninitialized;
        Ok(())
    }

    /// Reset, initialize and blank the panel
    ///
    /// On success the display is `Ready` and teardown on drop is armed. An
    /// interface error leaves the state at the step that failed.
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "initializing {}x{} panel",
            self.config.dimensions.width,
            self.config.dimensions.height
        );
        self.reset(delay)?;
        self.state = DisplayState::Initializing;
        init_sequence(&self.config)
            .run(&mut self.interface)
            .map_err(Error::Interface)?;
        self.state = DisplayState::Ready;
        self.clear()?;
        self.teardown_armed = true;
        log::info!("display ready");
        Ok(())
    }

    /// Push the framebuffer to the panel
    ///
    /// Returns `UpdateStatus::Coalesced` without sending anything while a
    /// frame taken by [`begin_update`](Self::begin_update) has not been
    /// finished.
    pub fn update(&mut self) -> Result<UpdateStatus, Error<I>> {
        let Some(pending) = self.begin_update() else {
            log::debug!("update already in flight, coalescing");
            return Ok(UpdateStatus::Coalesced);
        };
        self.finish_update(pending)?;
        Ok(UpdateStatus::Sent)
    }

    /// Snapshot the framebuffer and mark an update as in flight
    ///
    /// Returns `None` if one already is. Drawing after this call does not
    /// change the snapshot.
    pub fn begin_update(&mut self) -> Option<PendingFrame> {
        if self.update_in_flight {
            return None;
        }
        self.update_in_flight = true;
        Some(PendingFrame {
            frame: self.framebuffer.snapshot(),
        })
    }

    /// Stream a snapshot to the panel and clear the in-flight mark
    ///
    /// The mark is cleared even if the interface fails.
    pub fn finish_update(&mut self, pending: PendingFrame) -> DisplayResult<I> {
        let result = Sequence::new()
            .command_with(
                SET_COLUMN_ADDRESS,
                &[self.config.column_offset, self.config.column_end()],
            )
            .command_with(SET_ROW_ADDRESS, &[0, self.config.row_end()])
            .command(WRITE_RAM)
            .frame(pending.frame)
            .run(&mut self.interface)
            .map_err(Error::Interface);
        self.update_in_flight = false;
        result
    }

    /// Whether a frame from [`begin_update`](Self::begin_update) is pending
    pub fn update_in_flight(&self) -> bool {
        self.update_in_flight
    }

    /// Blank the framebuffer and push it
    pub fn clear(&mut self) -> Result<UpdateStatus, Error<I>> {
        self.framebuffer.clear();
        self.update()
    }

    /// Set the contrast current
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidContrast` for values outside `0..=255`; nothing
    /// is sent in that case.
    pub fn set_contrast(&mut self, value: i32) -> DisplayResult<I> {
        let Ok(contrast) = u8::try_from(value) else {
            log::warn!("contrast {value} out of range 0..=255, ignored");
            return Err(Error::InvalidContrast { value });
        };
        self.run(Sequence::new().command_with(SET_CONTRAST_CURRENT, &[contrast]))
    }

    /// Set the master contrast (only the low nibble is used)
    pub fn set_master_contrast(&mut self, value: u8) -> DisplayResult<I> {
        self.run(Sequence::new().command_with(SET_MASTER_CONTRAST, &[value & 0x0F]))
    }

    /// Switch between normal and inverted gray levels
    pub fn set_invert(&mut self, invert: bool) -> DisplayResult<I> {
        let command = if invert { DISPLAY_INVERT } else { DISPLAY_NORMAL };
        self.run(Sequence::new().command(command))
    }

    /// Blank the panel and switch it off
    pub fn turn_off_display(&mut self) -> DisplayResult<I> {
        self.clear()?;
        self.run(Sequence::new().command(DISPLAY_OFF))?;
        self.state = DisplayState::PoweredOff;
        log::info!("display turned off");
        Ok(())
    }

    /// Switch the panel back on
    ///
    /// RAM contents are shown as they were; nothing is redrawn.
    pub fn turn_on_display(&mut self) -> DisplayResult<I> {
        self.run(Sequence::new().command(DISPLAY_ON))?;
        self.state = DisplayState::Ready;
        log::info!("display turned on");
        Ok(())
    }

    /// Set a pixel in the framebuffer
    pub fn draw_pixel(&mut self, x: i32, y: i32, gray: u8) {
        render::draw_pixel(&mut self.framebuffer, x, y, gray);
    }

    /// Write a pixel straight to panel RAM, leaving the framebuffer alone
    ///
    /// A column address covers 4 pixels, so the other three pixels of the
    /// group are sent with their framebuffer values. Out-of-bounds
    /// coordinates send nothing.
    pub fn draw_pixel_direct(&mut self, x: i32, y: i32, gray: u8) -> DisplayResult<I> {
        let Some(mut group) = self.framebuffer.column_group(x, y) else {
            return Ok(());
        };
        let gray = gray & MAX_GRAY_LEVEL;
        let byte = &mut group[((x & 0x03) >> 1) as usize];
        *byte = if x & 1 == 0 {
            (*byte & 0x0F) | (gray << 4)
        } else {
            (*byte & 0xF0) | gray
        };

        // In bounds, so both fit the validated column and row windows
        let column = self.config.column_offset + (x >> 2) as u8;
        let row = y as u8;
        self.run(
            Sequence::new()
                .command_with(SET_COLUMN_ADDRESS, &[column, column])
                .command_with(SET_ROW_ADDRESS, &[row, row])
                .command(WRITE_RAM)
                .data(&group),
        )
    }

    /// Draw a line into the framebuffer, both endpoints included
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, gray: u8) {
        render::draw_line(&mut self.framebuffer, x0, y0, x1, y1, gray);
    }

    /// Fill a rectangle in the framebuffer
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, gray: u8) {
        render::fill_rect(&mut self.framebuffer, x, y, w, h, gray);
    }

    /// Move the text cursor
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Cursor::new(x, y);
    }

    /// Current text cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Draw text with a fixed-width font at the cursor
    pub fn write_string(&mut self, font: &FixedFont, size: u8, text: &str, gray: u8) {
        fixed::write_string(
            &mut self.framebuffer,
            &mut self.cursor,
            font,
            size,
            text,
            gray,
        );
    }

    /// Load a hex font file, replacing any previous font
    ///
    /// The glyph cache is dropped and must be rebuilt with
    /// [`cache_glyphs`](Self::cache_glyphs).
    ///
    /// # Errors
    ///
    /// Returns `Error::Font` if the file cannot be read.
    #[cfg(feature = "std")]
    pub fn load_hex_font<P: AsRef<std::path::Path>>(&mut self, path: P) -> DisplayResult<I> {
        let font = HexFont::load(path)?;
        self.set_hex_font(font);
        Ok(())
    }

    /// Use an already parsed hex font, replacing any previous font
    pub fn set_hex_font(&mut self, font: HexFont) {
        log::debug!("hex font set ({} glyphs)", font.len());
        self.hex_font = Some(font);
        self.glyph_cache = None;
    }

    /// Loaded hex font, if any
    pub fn hex_font(&self) -> Option<&HexFont> {
        self.hex_font.as_ref()
    }

    /// Rebuild the glyph cache for the characters of `text`
    pub fn cache_glyphs(&mut self, text: &str) {
        let cache = match &self.hex_font {
            Some(font) => GlyphCache::build(font, text),
            None => {
                log::warn!("no hex font loaded, glyph cache left empty");
                GlyphCache::default()
            }
        };
        self.glyph_cache = Some(cache);
    }

    /// Draw text with the hex font at the cursor
    ///
    /// Requires a loaded font and a glyph cache built for this text.
    pub fn write_string_unifont(&mut self, text: &str, gray: u8) {
        let (Some(font), Some(cache)) = (&self.hex_font, &self.glyph_cache) else {
            log::warn!("hex font or glyph cache missing, nothing drawn");
            return;
        };
        hex::write_string(
            &mut self.framebuffer,
            &mut self.cursor,
            font,
            cache,
            text,
            gray,
        );
    }

    /// Width in pixels of `text` with the cached hex glyphs
    ///
    /// 0 when no font or cache is present.
    pub fn string_width_unifont(&self, text: &str) -> u32 {
        match (&self.hex_font, &self.glyph_cache) {
            (Some(_), Some(cache)) => cache.string_width(text),
            _ => {
                log::warn!("hex font or glyph cache missing, width is 0");
                0
            }
        }
    }

    /// Paint a splash logo and push it
    pub fn show_logo(&mut self, logo: &Logo) -> Result<UpdateStatus, Error<I>> {
        logo.paint(&mut self.framebuffer);
        self.update()
    }

    /// Read a splash logo file and show it
    ///
    /// # Errors
    ///
    /// Returns `Error::Logo` if the file cannot be read or parsed; the
    /// framebuffer is left untouched in that case.
    #[cfg(feature = "std")]
    pub fn load_logo<P: AsRef<std::path::Path>>(
        &mut self,
        path: P,
    ) -> Result<UpdateStatus, Error<I>> {
        let logo = Logo::load(path)?;
        self.show_logo(&logo)
    }

    /// Skip blanking the panel when the display is dropped
    pub fn disarm_teardown(&mut self) {
        self.teardown_armed = false;
    }

    /// Current lifecycle state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Framebuffer contents
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Mutable framebuffer access for custom drawing
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.framebuffer
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn run(&mut self, sequence: Sequence) -> DisplayResult<I> {
        sequence.run(&mut self.interface).map_err(Error::Interface)
    }
}

impl<I> Drop for Display<I>
where
    I: DisplayInterface,
{
    fn drop(&mut self) {
        if !self.teardown_armed {
            return;
        }
        log::debug!("blanking panel on drop");
        // Nothing can still be streaming once we hold &mut self
        self.update_in_flight = false;
        if let Err(e) = self.clear() {
            log::error!("failed to blank panel on drop: {e}");
        }
    }
}

/// Power-on register setup, ending with the panel switched on
fn init_sequence(config: &Config) -> Sequence {
    Sequence::new()
        .command_with(SET_COMMAND_LOCK, &[COMMAND_UNLOCK])
        .command(DISPLAY_OFF)
        .command_with(
            SET_COLUMN_ADDRESS,
            &[config.column_offset, config.column_end()],
        )
        .command_with(SET_ROW_ADDRESS, &[0, config.row_end()])
        .command_with(SET_CLOCK_DIVIDER, &[config.clock_divisor])
        .command_with(SET_MUX_RATIO, &[config.row_end()])
        .command_with(SET_DISPLAY_OFFSET, &[config.display_offset])
        .command_with(SET_START_LINE, &[config.start_line])
        .command_with(SET_REMAP, &config.remap)
        .command_with(SET_GPIO, &[config.gpio])
        .command_with(SET_VDD_SOURCE, &[config.vdd_source])
        .command_with(SET_ENHANCEMENT_A, &config.enhancement_a)
        .command_with(SET_CONTRAST_CURRENT, &[config.contrast])
        .command_with(SET_MASTER_CONTRAST, &[config.master_contrast])
        .command(DEFAULT_GRAYSCALE_TABLE)
        .command(ENABLE_GRAYSCALE_TABLE)
        .command_with(SET_PHASE_LENGTH, &[config.phase_length])
        .command_with(SET_ENHANCEMENT_B, &config.enhancement_b)
        .command_with(SET_PRECHARGE_VOLTAGE, &[config.precharge_voltage])
        .command_with(SET_SECOND_PRECHARGE, &[config.second_precharge])
        .command_with(SET_VCOMH, &[config.vcomh])
        .command(DISPLAY_NORMAL)
        .command(DISPLAY_ON)
}
