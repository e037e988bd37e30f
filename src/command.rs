//! SSD1322 command definitions
//!
//! This module defines the command bytes used to control the SSD1322 OLED
//! controller. Commands are sent with the DC line low; their parameters follow
//! with the DC line high.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command phase)
//! 2. Send command byte
//! 3. Set DC high (data phase)
//! 4. Send parameter bytes (if any)
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1322::{command, DisplayInterface, Phase, SpiInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = SpiInterface::new(MockSpi, MockPin, MockPin);
//! // Set contrast current to the maximum
//! let _ = interface.set_phase(Phase::Command);
//! let _ = interface.write(&[command::SET_CONTRAST_CURRENT]);
//! let _ = interface.set_phase(Phase::Data);
//! let _ = interface.write(&[0xFF]);
//! ```

// Addressing

/// Set column address window (0x15)
///
/// Requires 2 bytes: [start, end]. One column address covers 4 pixels.
/// Valid range 0x00..=0x77.
pub const SET_COLUMN_ADDRESS: u8 = 0x15;

/// Set row address window (0x75)
///
/// Requires 2 bytes: [start, end]. Valid range 0x00..=0x7F.
pub const SET_ROW_ADDRESS: u8 = 0x75;

/// Write RAM (0x5C)
///
/// Every data byte that follows is written into the current window,
/// 2 pixels per byte.
pub const WRITE_RAM: u8 = 0x5C;

/// Read RAM (0x5D)
pub const READ_RAM: u8 = 0x5D;

/// Set re-map and dual COM line mode (0xA0)
///
/// Requires 2 bytes: [remap, dual COM].
pub const SET_REMAP: u8 = 0xA0;

/// Set display start line (0xA1)
pub const SET_START_LINE: u8 = 0xA1;

/// Set display offset (0xA2)
pub const SET_DISPLAY_OFFSET: u8 = 0xA2;

// Display mode

/// Entire display off, all pixels at gray level 0 (0xA4)
pub const DISPLAY_ALL_OFF: u8 = 0xA4;

/// Entire display on, all pixels at gray level 15 (0xA5)
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal display (0xA6)
pub const DISPLAY_NORMAL: u8 = 0xA6;

/// Inverse display (0xA7)
pub const DISPLAY_INVERT: u8 = 0xA7;

/// Sleep mode on, display off (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Sleep mode off, display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Power and timing

/// Function selection, VDD regulator (0xAB)
///
/// Requires 1 byte: 0x00 = external VDD, 0x01 = internal regulator.
pub const SET_VDD_SOURCE: u8 = 0xAB;

/// Set phase length (0xB1)
///
/// Requires 1 byte: phase 2 period in the high nibble, phase 1 in the low nibble.
pub const SET_PHASE_LENGTH: u8 = 0xB1;

/// Set front clock divider / oscillator frequency (0xB3)
pub const SET_CLOCK_DIVIDER: u8 = 0xB3;

/// Display enhancement A (0xB4)
///
/// Requires 2 bytes: [VSL selection, low gray quality].
pub const SET_ENHANCEMENT_A: u8 = 0xB4;

/// Set GPIO (0xB5)
pub const SET_GPIO: u8 = 0xB5;

/// Set second precharge period (0xB6)
pub const SET_SECOND_PRECHARGE: u8 = 0xB6;

/// Set gray scale table (0xB8)
///
/// Requires 15 bytes of gray levels GS1..GS15.
pub const SET_GRAYSCALE_TABLE: u8 = 0xB8;

/// Select default linear gray scale table (0xB9)
pub const DEFAULT_GRAYSCALE_TABLE: u8 = 0xB9;

/// Enable gray scale table (0x00)
pub const ENABLE_GRAYSCALE_TABLE: u8 = 0x00;

/// Set precharge voltage (0xBB)
pub const SET_PRECHARGE_VOLTAGE: u8 = 0xBB;

/// Set VCOMH voltage (0xBE)
pub const SET_VCOMH: u8 = 0xBE;

/// Set contrast current (0xC1)
///
/// Requires 1 byte, 0x00..=0xFF.
pub const SET_CONTRAST_CURRENT: u8 = 0xC1;

/// Master contrast current control (0xC7)
///
/// Requires 1 byte; only the low nibble is used.
pub const SET_MASTER_CONTRAST: u8 = 0xC7;

/// Set multiplex ratio (0xCA)
///
/// Requires 1 byte: number of active rows minus one.
pub const SET_MUX_RATIO: u8 = 0xCA;

/// Display enhancement B (0xD1)
pub const SET_ENHANCEMENT_B: u8 = 0xD1;

/// Set command lock (0xFD)
///
/// Requires 1 byte: 0x12 = unlock, 0x16 = lock.
pub const SET_COMMAND_LOCK: u8 = 0xFD;

/// Parameter for [`SET_COMMAND_LOCK`] that unlocks the command interface
pub const COMMAND_UNLOCK: u8 = 0x12;
