//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and its two
//! implementations for communicating with SH1106-class controllers:
//!
//! - [`I2cInterface`]: two-wire bus. Each write is prefixed with a control
//!   byte telling the controller whether a command stream or a display-RAM
//!   stream follows.
//! - [`SpiInterface`]: 4-wire serial. A dedicated D/C line selects command
//!   vs data framing; an optional chip-select line brackets each transfer.
//!
//! Both variants own an optional reset line. Resetting without a reset line
//! is a no-op, never an error; the line may simply be tied to the MCU
//! reset rail.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use sh1106::{DisplayInterface, I2cInterface, DEFAULT_ADDRESS};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl embedded_hal::i2c::I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [embedded_hal::i2c::Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl embedded_hal::digital::OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! // No reset line wired
//! let mut interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS, None::<MockPin>);
//!
//! // Send a command sequence (display off)
//! let _ = interface.send_command(&[0xAE]);
//!
//! // Send display RAM bytes
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//!
//! // No-op, since no reset line was configured
//! let _ = interface.reset(&mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiBus;

use crate::error::MAX_COLUMNS;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default I2C address of SH1106 modules (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// I2C control byte announcing a command stream (Co=0, D/C#=0)
const CONTROL_COMMAND: u8 = 0x00;

/// I2C control byte announcing a display-RAM stream (Co=0, D/C#=1)
const CONTROL_DATA: u8 = 0x40;

/// Largest payload sent in one addressed I2C write
///
/// Sized so a full page of the widest supported panel always goes out as a
/// single bus write.
const I2C_CHUNK: usize = MAX_COLUMNS as usize;

/// Trait for hardware interface to the display controller
///
/// This trait abstracts over the two bus transports, allowing the
/// [`Display`](crate::display::Display) to work with either. All calls are
/// synchronous: they return once the underlying transport has accepted the
/// bytes, in order, with the correct framing. A transport failure fails the
/// whole call; there is no partial-write reporting.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send command bytes to the controller
    ///
    /// Every byte of the slice is delivered in command framing. Parameters
    /// of multi-byte commands are command bytes too on this controller
    /// family, so a whole sequence may be passed at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction or GPIO access fails.
    fn send_command(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send display RAM bytes to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction or GPIO access fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset, if a reset line is configured
    ///
    /// Drives the line high for 1 ms, low for 20 ms, then high again and
    /// waits another 20 ms before returning. Without a reset line this is a
    /// no-op returning `Ok`.
    ///
    /// # Errors
    ///
    /// Returns an error if toggling the reset line fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the bus and GPIO error types so callers can match on the
/// underlying hardware error.
#[derive(Debug)]
pub enum InterfaceError<CommErr, PinErr> {
    /// Bus communication error (I2C or SPI)
    Comm(CommErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<CommErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<CommErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Comm(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<CommErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<CommErr, PinErr> {}

/// Shared reset sequencing for both transports
///
/// Timing follows the controller datasheet: a short high settle, a 20 ms
/// low pulse, then 20 ms for the charge pump to stabilize.
fn reset_sequence<RST: OutputPin, D: DelayNs>(
    rst: Option<&mut RST>,
    delay: &mut D,
) -> InterfaceResult<(), RST::Error> {
    let Some(rst) = rst else {
        return Ok(());
    };
    rst.set_high()?;
    delay.delay_ms(1);
    rst.set_low()?;
    delay.delay_ms(20);
    rst.set_high()?;
    delay.delay_ms(20);
    Ok(())
}

/// Two-wire bus interface
///
/// Frames every transfer with a control byte and issues a single addressed
/// write per call (page-sized data transfers always fit one write; larger
/// slices are split at page granularity).
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]
/// * `RST` - Optional reset pin implementing [`OutputPin`]
pub struct I2cInterface<I2C, RST> {
    /// Bus handle
    i2c: I2C,
    /// Fixed device address
    address: u8,
    /// Reset pin, if wired
    rst: Option<RST>,
    /// Staging buffer: control byte followed by up to one page of payload
    buf: [u8; I2C_CHUNK + 1],
}

impl<I2C, RST> I2cInterface<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    /// Create a new I2C interface
    ///
    /// # Arguments
    ///
    /// * `i2c` - Bus handle (must implement [`I2c`])
    /// * `address` - Device address, usually [`DEFAULT_ADDRESS`]
    /// * `rst` - Reset pin, or `None` if the line is not wired
    pub fn new(i2c: I2C, address: u8, rst: Option<RST>) -> Self {
        Self {
            i2c,
            address,
            rst,
            buf: [0; I2C_CHUNK + 1],
        }
    }

    /// Get the configured device address
    pub fn address(&self) -> u8 {
        self.address
    }

    fn write_framed(
        &mut self,
        control: u8,
        bytes: &[u8],
    ) -> InterfaceResult<(), InterfaceError<I2C::Error, RST::Error>> {
        for chunk in bytes.chunks(I2C_CHUNK) {
            self.buf[0] = control;
            self.buf[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &self.buf[..=chunk.len()])
                .map_err(InterfaceError::Comm)?;
        }
        Ok(())
    }
}

impl<I2C, RST> DisplayInterface for I2cInterface<I2C, RST>
where
    I2C: I2c,
    I2C::Error: Debug,
    RST: OutputPin,
    RST::Error: Debug,
{
    type Error = InterfaceError<I2C::Error, RST::Error>;

    fn send_command(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_framed(CONTROL_COMMAND, bytes)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_framed(CONTROL_DATA, data)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        reset_sequence(self.rst.as_mut(), delay).map_err(InterfaceError::Pin)
    }
}

/// 4-wire serial interface
///
/// Drives the D/C line low for commands and high for data, optionally
/// bracketing each transfer with the chip-select line. A missing
/// chip-select line means it is hardwired low, which is legal and common
/// when the display is the only device on the bus.
///
/// ## Type Parameters
///
/// * `SPI` - Bus implementing [`SpiBus`]
/// * `DC` - Data/command select pin implementing [`OutputPin`]
/// * `CS` - Optional chip-select pin implementing [`OutputPin`]
/// * `RST` - Optional reset pin implementing [`OutputPin`]
pub struct SpiInterface<SPI, DC, CS, RST> {
    /// Bus handle
    spi: SPI,
    /// Data/command select pin (low=command, high=data)
    dc: DC,
    /// Chip-select pin (active low), if wired
    cs: Option<CS>,
    /// Reset pin, if wired
    rst: Option<RST>,
}

impl<SPI, DC, CS, RST, PinErr> SpiInterface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    /// Create a new SPI interface
    ///
    /// # Arguments
    ///
    /// * `spi` - Bus handle (must implement [`SpiBus`])
    /// * `dc` - Data/command select pin (output, low=command, high=data)
    /// * `rst` - Reset pin, or `None` if the line is not wired
    /// * `cs` - Chip-select pin, or `None` if the line is hardwired
    pub fn new(spi: SPI, dc: DC, rst: Option<RST>, cs: Option<CS>) -> Self {
        Self { spi, dc, cs, rst }
    }

    fn transfer(
        &mut self,
        data_mode: bool,
        bytes: &[u8],
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr>> {
        if data_mode {
            self.dc.set_high().map_err(InterfaceError::Pin)?;
        } else {
            self.dc.set_low().map_err(InterfaceError::Pin)?;
        }
        if let Some(cs) = self.cs.as_mut() {
            cs.set_low().map_err(InterfaceError::Pin)?;
        }
        let io = self
            .spi
            .write(bytes)
            .and_then(|()| self.spi.flush())
            .map_err(InterfaceError::Comm);
        // Release chip select even when the write failed
        let release = match self.cs.as_mut() {
            Some(cs) => cs.set_high().map_err(InterfaceError::Pin),
            None => Ok(()),
        };
        io?;
        release
    }
}

impl<SPI, DC, CS, RST, PinErr> DisplayInterface for SpiInterface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.transfer(false, bytes)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.transfer(true, data)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        reset_sequence(self.rst.as_mut(), delay).map_err(InterfaceError::Pin)
    }
}
