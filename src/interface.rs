//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and its two
//! implementations for talking to the SSD1322 controller:
//!
//! - [`SpiInterface`] - hardware SPI (4-wire: SCK, MOSI, DC, RST)
//! - [`BitBangInterface`] - GPIO-driven clock and data lines
//!
//! ## Hardware Requirements
//!
//! Both realizations drive two extra GPIO lines:
//!   - **DC**: Data/Command select (output, low = command, high = data)
//!   - **RST**: Reset (output, active low)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1322::{DisplayInterface, Phase, SpiInterface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = SpiInterface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send a command followed by its parameter
//! let _ = interface.set_phase(Phase::Command);
//! let _ = interface.write(&[0xC1]);
//! let _ = interface.set_phase(Phase::Data);
//! let _ = interface.write(&[0x80]);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// How long the reset line is held low, in milliseconds
pub const RESET_HOLD_MS: u32 = 10;

/// Bus phase selected by the DC line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Following bytes are controller commands (DC low)
    Command,
    /// Following bytes are command parameters or pixel data (DC high)
    Data,
}

/// Trait for hardware interface to the SSD1322 controller
///
/// This trait abstracts over different transports, allowing the
/// [`Display`](crate::display::Display) to work with hardware SPI or
/// bit-banged GPIO without knowing which one is in use.
///
/// ## Implementing
///
/// For most cases, use [`SpiInterface`] or [`BitBangInterface`]. If you need
/// custom behavior (e.g., a shared bus with manual chip select), implement
/// this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Select the phase for all following writes
    ///
    /// # Errors
    ///
    /// Returns an error if the DC line cannot be driven.
    fn set_phase(&mut self, phase: Phase) -> InterfaceResult<(), Self::Error>;

    /// Transmit bytes in the current phase
    ///
    /// `bytes` may be a single command byte or a whole frame. Bytes must go
    /// out in order and a call must not be merged with any other.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST low
    /// 2. Wait at least [`RESET_HOLD_MS`]
    /// 3. Set RST high
    ///
    /// # Errors
    ///
    /// Returns an error if the reset line cannot be driven.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

fn pulse_reset<RST, D>(rst: &mut RST, delay: &mut D) -> Result<(), RST::Error>
where
    RST: OutputPin,
    D: DelayNs,
{
    rst.set_low()?;
    delay.delay_ms(RESET_HOLD_MS);
    rst.set_high()
}

/// Hardware SPI interface
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct SpiInterface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new SPI interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn set_phase(&mut self, phase: Phase) -> InterfaceResult<(), Self::Error> {
        match phase {
            Phase::Command => self.dc.set_low(),
            Phase::Data => self.dc.set_high(),
        }
        .map_err(InterfaceError::Pin)
    }

    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.spi.write(bytes).map_err(InterfaceError::Spi)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        pulse_reset(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}

/// Bit-banged serial interface over four GPIO lines
///
/// Bytes are shifted out MSB first: DIN is set while CLK is low and the
/// controller samples it on the rising edge. CLK must idle low.
///
/// ## Type Parameters
///
/// * `CLK` - Serial clock pin
/// * `DIN` - Serial data pin
/// * `DC` - Data/Command pin
/// * `RST` - Reset pin
pub struct BitBangInterface<CLK, DIN, DC, RST> {
    clk: CLK,
    din: DIN,
    dc: DC,
    rst: RST,
}

impl<CLK, DIN, DC, RST> BitBangInterface<CLK, DIN, DC, RST>
where
    CLK: OutputPin,
    DIN: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new bit-banged interface
    pub fn new(clk: CLK, din: DIN, dc: DC, rst: RST) -> Self {
        Self { clk, din, dc, rst }
    }

    /// Give back the pins
    pub fn release(self) -> (CLK, DIN, DC, RST) {
        (self.clk, self.din, self.dc, self.rst)
    }
}

impl<CLK, DIN, DC, RST, PinErr> BitBangInterface<CLK, DIN, DC, RST>
where
    CLK: OutputPin<Error = PinErr>,
    DIN: OutputPin<Error = PinErr>,
{
    fn shift_out(&mut self, byte: u8) -> Result<(), PinErr> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.din.set_high()?;
            } else {
                self.din.set_low()?;
            }
            self.clk.set_high()?;
            self.clk.set_low()?;
        }
        Ok(())
    }
}

impl<CLK, DIN, DC, RST, PinErr> DisplayInterface for BitBangInterface<CLK, DIN, DC, RST>
where
    CLK: OutputPin<Error = PinErr>,
    DIN: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<Infallible, PinErr>;

    fn set_phase(&mut self, phase: Phase) -> InterfaceResult<(), Self::Error> {
        match phase {
            Phase::Command => self.dc.set_low(),
            Phase::Data => self.dc.set_high(),
        }
        .map_err(InterfaceError::Pin)
    }

    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        for &byte in bytes {
            self.shift_out(byte).map_err(InterfaceError::Pin)?;
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        pulse_reset(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}
