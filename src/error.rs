//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! display operations ([`Error`]) and asset loading ([`FontError`], [`LogoError`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`FontError`] - Hex font file could not be read
//! - [`LogoError`] - Splash logo could not be read or parsed
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use ssd1322::{BuilderError, Dimensions};
//!
//! // Width must be a multiple of 4
//! let result = Dimensions::new(254, 64);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Too many rows
//! let result = Dimensions::new(256, 200);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum segment outputs (columns in pixels) supported by the SSD1322
pub const MAX_SEGMENTS: u16 = 480;

/// Maximum common outputs (rows) supported by the SSD1322
pub const MAX_COMMONS: u16 = 128;

/// Highest column address of the SSD1322 display RAM
///
/// Each column address covers 4 horizontal pixels.
pub const MAX_COLUMN_ADDRESS: u8 = 0x77;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// The instruction sequence that hit it was aborted; panel RAM may be
    /// partially written.
    Interface(I::Error),
    /// Contrast value outside `0..=255`
    ///
    /// Rejected before anything is transmitted.
    InvalidContrast {
        /// Value requested by the caller
        value: i32,
    },
    /// Hex font could not be loaded
    Font(FontError),
    /// Splash logo could not be loaded
    Logo(LogoError),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidContrast { value } => {
                write!(f, "Invalid contrast {value}: must be between 0 and 255")
            }
            Self::Font(e) => write!(f, "Font error: {e}"),
            Self::Logo(e) => write!(f, "Logo error: {e}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<FontError> for Error<I> {
    fn from(e: FontError) -> Self {
        Self::Font(e)
    }
}

impl<I: DisplayInterface> From<LogoError> for Error<I> {
    fn from(e: LogoError) -> Self {
        Self::Logo(e)
    }
}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
    /// The column window does not fit in the controller's display RAM
    ///
    /// `offset + chunks - 1` must not exceed [`MAX_COLUMN_ADDRESS`].
    ColumnWindowOutOfRange {
        /// First column address
        offset: u8,
        /// Number of 4-pixel column groups
        chunks: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_SEGMENTS}x{MAX_COMMONS}, width must be multiple of 4)"
            ),
            Self::ColumnWindowOutOfRange { offset, chunks } => write!(
                f,
                "Column window {offset}+{chunks} exceeds column address {MAX_COLUMN_ADDRESS:#04x}"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors raised while loading a hex font
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be read
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl core::fmt::Display for FontError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            #[cfg(feature = "std")]
            Self::Io(ref e) => write!(f, "cannot read font file: {e}"),
        }
    }
}

impl core::error::Error for FontError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for FontError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors raised while loading a splash logo
#[derive(Debug)]
pub enum LogoError {
    /// A line is not a decimal run length
    InvalidRun {
        /// One-based line number
        line: usize,
    },
    /// The logo file could not be read
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl core::fmt::Display for LogoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRun { line } => write!(f, "invalid run length on line {line}"),
            #[cfg(feature = "std")]
            Self::Io(e) => write!(f, "cannot read logo file: {e}"),
        }
    }
}

impl core::error::Error for LogoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for LogoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
