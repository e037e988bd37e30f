//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMN_ADDRESS, MAX_COMMONS, MAX_SEGMENTS};

/// Column address the panel's visible area starts at
///
/// 256-pixel wide SSD1322 modules are wired to the middle of the 480-segment
/// RAM, so their first visible column group is 28.
pub const DEFAULT_COLUMN_OFFSET: u8 = 28;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (segment outputs)
    pub width: u16,
    /// Height in pixels (common outputs)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0, above MAX_SEGMENTS, or not a multiple of 4
    /// - height is 0 or above MAX_COMMONS
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_SEGMENTS || width % 4 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_COMMONS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 4-pixel column groups per row
    pub fn horizontal_chunks(&self) -> usize {
        (self.width >> 2) as usize
    }

    /// Calculate required buffer size in bytes (2 pixels per byte)
    pub fn buffer_size(&self) -> usize {
        2 * self.horizontal_chunks() * self.height as usize
    }
}

impl Default for Dimensions {
    /// 256x64, the common SSD1322 module size
    fn default() -> Self {
        Self {
            width: 256,
            height: 64,
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the SSD1322 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// First column address of the visible area
    pub column_offset: u8,
    /// Front clock divider / oscillator frequency
    pub clock_divisor: u8,
    /// Display offset (vertical scroll by COM)
    pub display_offset: u8,
    /// Display start line
    pub start_line: u8,
    /// Re-map and dual COM line mode bytes
    pub remap: [u8; 2],
    /// GPIO setting
    pub gpio: u8,
    /// VDD source: 0x01 selects the internal regulator
    pub vdd_source: u8,
    /// Display enhancement A bytes
    pub enhancement_a: [u8; 2],
    /// Contrast current applied at initialization
    pub contrast: u8,
    /// Master contrast, low nibble only
    pub master_contrast: u8,
    /// Phase length byte (phase 2 high nibble, phase 1 low nibble)
    pub phase_length: u8,
    /// Display enhancement B bytes
    pub enhancement_b: [u8; 2],
    /// Precharge voltage
    pub precharge_voltage: u8,
    /// Second precharge period
    pub second_precharge: u8,
    /// VCOMH voltage
    pub vcomh: u8,
}

impl Config {
    /// Last column address of the visible area
    pub fn column_end(&self) -> u8 {
        // Validated by the builder to fit MAX_COLUMN_ADDRESS
        (self.column_offset as usize + self.dimensions.horizontal_chunks() - 1) as u8
    }

    /// Last row address of the visible area
    pub fn row_end(&self) -> u8 {
        (self.dimensions.height - 1) as u8
    }
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().settings()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use ssd1322::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(256, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).contrast(0x9F).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.column_end(), 91);
/// ```
#[must_use]
pub struct Builder {
    dimensions: Dimensions,
    column_offset: u8,
    clock_divisor: u8,
    display_offset: u8,
    start_line: u8,
    remap: [u8; 2],
    gpio: u8,
    vdd_source: u8,
    enhancement_a: [u8; 2],
    contrast: u8,
    master_contrast: u8,
    phase_length: u8,
    enhancement_b: [u8; 2],
    precharge_voltage: u8,
    second_precharge: u8,
    vcomh: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            column_offset: DEFAULT_COLUMN_OFFSET,
            // Divide by 2, oscillator frequency 0xF
            clock_divisor: 0xF1,
            display_offset: 0x00,
            start_line: 0x00,
            // Horizontal address increment, nibble remap, COM scan from N-1 to 0
            remap: [0x14, 0x11],
            // GPIO pins input disabled
            gpio: 0x00,
            // Internal VDD regulator
            vdd_source: 0x01,
            // External VSL, normal low gray quality
            enhancement_a: [0xA0, 0xB5],
            contrast: 0xFF,
            master_contrast: 0x0F,
            // Phase 1 = 5 DCLKs, phase 2 = 3 DCLKs
            phase_length: 0x35,
            enhancement_b: [0x82, 0x20],
            precharge_voltage: 0x1F,
            second_precharge: 0x08,
            vcomh: 0x07,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (defaults to 256x64)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the first column address of the visible area
    pub fn column_offset(mut self, value: u8) -> Self {
        self.column_offset = value;
        self
    }

    /// Set the front clock divider / oscillator frequency byte
    pub fn clock_divisor(mut self, value: u8) -> Self {
        self.clock_divisor = value;
        self
    }

    /// Set the display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set the display start line
    pub fn start_line(mut self, value: u8) -> Self {
        self.start_line = value;
        self
    }

    /// Set re-map and dual COM line mode
    pub fn remap(mut self, values: [u8; 2]) -> Self {
        self.remap = values;
        self
    }

    /// Set the GPIO byte
    pub fn gpio(mut self, value: u8) -> Self {
        self.gpio = value;
        self
    }

    /// Set the VDD source selection
    pub fn vdd_source(mut self, value: u8) -> Self {
        self.vdd_source = value;
        self
    }

    /// Set display enhancement A
    pub fn enhancement_a(mut self, values: [u8; 2]) -> Self {
        self.enhancement_a = values;
        self
    }

    /// Set the initial contrast current
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set master contrast (only the low nibble is kept)
    pub fn master_contrast(mut self, value: u8) -> Self {
        self.master_contrast = value & 0x0F;
        self
    }

    /// Set phase 1 and phase 2 lengths in DCLKs (4 bits each)
    pub fn phase_length(mut self, phase1: u8, phase2: u8) -> Self {
        self.phase_length = ((phase2 & 0x0F) << 4) | (phase1 & 0x0F);
        self
    }

    /// Set display enhancement B
    pub fn enhancement_b(mut self, values: [u8; 2]) -> Self {
        self.enhancement_b = values;
        self
    }

    /// Set precharge voltage
    pub fn precharge_voltage(mut self, value: u8) -> Self {
        self.precharge_voltage = value;
        self
    }

    /// Set second precharge period
    pub fn second_precharge(mut self, value: u8) -> Self {
        self.second_precharge = value;
        self
    }

    /// Set VCOMH voltage
    pub fn vcomh(mut self, value: u8) -> Self {
        self.vcomh = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::ColumnWindowOutOfRange` if the visible columns
    /// starting at the configured offset run past the controller's RAM.
    pub fn build(self) -> Result<Config, BuilderError> {
        let chunks = self.dimensions.horizontal_chunks();
        if self.column_offset as usize + chunks - 1 > MAX_COLUMN_ADDRESS as usize {
            return Err(BuilderError::ColumnWindowOutOfRange {
                offset: self.column_offset,
                chunks: chunks as u16,
            });
        }
        Ok(self.settings())
    }

    fn settings(self) -> Config {
        Config {
            dimensions: self.dimensions,
            column_offset: self.column_offset,
            clock_divisor: self.clock_divisor,
            display_offset: self.display_offset,
            start_line: self.start_line,
            remap: self.remap,
            gpio: self.gpio,
            vdd_source: self.vdd_source,
            enhancement_a: self.enhancement_a,
            contrast: self.contrast,
            master_contrast: self.master_contrast,
            phase_length: self.phase_length,
            enhancement_b: self.enhancement_b,
            precharge_voltage: self.precharge_voltage,
            second_precharge: self.second_precharge,
            vcomh: self.vcomh,
        }
    }
}
