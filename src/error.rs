//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Out-of-bounds pixel and drawing operations are deliberately NOT errors:
//! they clip silently, so generic drawing code that touches the edges keeps
//! working unmodified.
//!
//! ## Example
//!
//! ```
//! use sh1106::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(500, 64); // Too wide
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum columns (width) addressable by SH1106-class controllers
///
/// The controller RAM is 132 columns wide; common panels wire 128 of them.
pub const MAX_COLUMNS: u16 = 132;

/// Maximum rows (height) addressable by SH1106-class controllers
///
/// The controller drives up to 64 COM lines (8 pages of 8 pixels).
pub const MAX_ROWS: u16 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (bus or GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation, unchanged. The driver performs no retry of its own;
    /// the caller's bus primitive may already have a retry policy and
    /// double-retrying risks protocol desync.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is
/// created, at the call that supplied the bad value.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width (columns) requested
        width: u16,
        /// Height (rows) requested
        height: u16,
    },
    /// Invalid rotation value
    ///
    /// Only 0, 90, 180 and 270 degrees are supported; see
    /// [`Rotation::from_degrees()`](crate::config::Rotation::from_degrees).
    InvalidRotation {
        /// Degree count requested
        degrees: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
            Self::InvalidRotation { degrees } => {
                write!(f, "Invalid rotation {degrees} (must be 0, 90, 180 or 270)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
