//! SSD1322 Grayscale OLED Display Driver
//!
//! A driver for the SSD1322 dot-matrix OLED controller with 16 gray levels,
//! supporting panels up to 480x128 pixels (256x64 by default).
//!
//! ## Features
//!
//! - `no_std` compatible (an allocator is required)
//! - `embedded-hal` v1.0 support, over hardware SPI or bit-banged GPIO
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Packed 4-bit framebuffer with pixel, line and rectangle drawing
//! - Built-in 5x7 font and GNU Unifont `.hex` fonts
//! - Run-length splash logos
//! - Font and logo files from disk (with `std` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1322::{Builder, Dimensions, Display, FONT_5X7, SpiInterface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = SpiInterface::new(spi, dc, rst);
//! let dims = match Dimensions::new(256, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).contrast(0x9F).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.begin(&mut delay).is_err() {
//!     return;
//! }
//!
//! display.draw_line(0, 0, 255, 63, 0x8);
//! display.set_cursor(4, 4);
//! display.write_string(&FONT_5X7, 1, "Hello", 0xF);
//! let _ = display.update();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// SSD1322 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Text rendering with fixed-width and hex fonts
pub mod font;
/// Packed 4-bit grayscale framebuffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Run-length splash logos
pub mod logo;
/// Pixel, line and rectangle drawing
pub mod render;
/// Command/data instruction sequences
pub mod sequence;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{Builder, Config, DEFAULT_COLUMN_OFFSET, Dimensions, MAX_COMMONS, MAX_SEGMENTS};
pub use display::{Display, DisplayState, PendingFrame, UpdateStatus};
pub use error::{BuilderError, Error, FontError, LogoError};
pub use font::{Cursor, FONT_5X7, FixedFont, GlyphCache, HexFont};
pub use framebuffer::{FrameBuffer, MAX_GRAY_LEVEL};
pub use interface::{
    BitBangInterface, DisplayInterface, InterfaceError, Phase, RESET_HOLD_MS, SpiInterface,
};
pub use logo::Logo;
pub use sequence::Sequence;
