//! SH1106 OLED Display Driver
//!
//! A driver for SH1106-class monochrome OLED display controllers
//! (page/column addressed RAM, up to 132x64 pixels), over I2C or 4-wire SPI.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocator required
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - 0/90/180/270 degree rotation, runtime 180-degree flip
//! - Partial refresh: unchanged pages are skipped via a per-page dirty cache
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use sh1106::{Builder, Dimensions, Display, I2cInterface, Rotation, DEFAULT_ADDRESS};
//!
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
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(i2c, DEFAULT_ADDRESS, None::<MockPin>);
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate0).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init_display(&mut delay);
//!
//! display.set_pixel(0, 0, true);
//! let _ = display.show(false);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SH1106 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Packed 1-bit-per-pixel framebuffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Rotation handling
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
mod graphics;

pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, Rotation};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use framebuffer::Framebuffer;
pub use interface::{
    DEFAULT_ADDRESS, DisplayInterface, I2cInterface, InterfaceError, SpiInterface,
};
