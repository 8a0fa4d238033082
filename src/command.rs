//! SH1106 command definitions
//!
//! This module defines the command bytes used to control SH1106-class OLED
//! controllers. Unlike controllers with a separate parameter channel, every
//! byte of a command sequence (opcode and parameters alike) travels in
//! command framing; only display RAM contents travel as data.
//!
//! Several opcodes carry their argument in the low bits of the command byte
//! itself (`SET_DISP | 0x01`, `SET_PAGE_ADDRESS | page`), matching the
//! controller's register map.

// Fundamental commands

/// Set contrast command (0x81)
///
/// Followed by one command byte holding the contrast level (0-255).
pub const SET_CONTRAST: u8 = 0x81;

/// Resume to RAM content display command (0xA4)
///
/// Output follows RAM content (as opposed to the all-on test mode 0xA5).
pub const SET_ENTIRE_ON: u8 = 0xA4;

/// Normal/inverse display command (0xA6)
///
/// OR with 0x01 to invert: a RAM bit of 0 then lights the pixel.
pub const SET_NORM_INV: u8 = 0xA6;

/// Display on/off command (0xAE)
///
/// OR with 0x01 to switch the panel on; the bare opcode switches it off
/// (sleep mode). Does not affect the charge pump or RAM contents.
pub const SET_DISP: u8 = 0xAE;

// Addressing commands

/// Set memory addressing mode command (0x20)
///
/// Followed by one byte: 0x00 selects horizontal (page-sequential) mode.
pub const SET_MEM_ADDR: u8 = 0x20;

/// Lower column address command (0x00)
///
/// OR with the low nibble of the target column.
pub const LOW_COLUMN_ADDRESS: u8 = 0x00;

/// Higher column address command (0x10)
///
/// OR with the high nibble of the target column.
pub const HIGH_COLUMN_ADDRESS: u8 = 0x10;

/// Set page address command (0xB0)
///
/// OR with the page index (0-7).
pub const SET_PAGE_ADDRESS: u8 = 0xB0;

/// Display start line command (0x40)
///
/// OR with the start line (0-63); the bare opcode selects line 0.
pub const SET_DISP_START_LINE: u8 = 0x40;

/// Display offset command (0xD3)
///
/// Followed by one byte holding the vertical shift (0-63).
pub const SET_DISP_OFFSET: u8 = 0xD3;

// Hardware configuration commands

/// Segment remap command (0xA0)
///
/// OR with [`SEG_REMAP_REVERSE`] to mirror column addressing horizontally.
/// Affects how subsequent RAM writes are laid out, so changing it requires
/// rewriting display RAM.
pub const SET_SEG_REMAP: u8 = 0xA0;

/// Bit selecting reversed segment remap
pub const SEG_REMAP_REVERSE: u8 = 0x01;

/// Multiplex ratio command (0xA8)
///
/// Followed by one byte: number of active rows minus one.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// COM output scan direction command (0xC0)
///
/// OR with [`COM_SCAN_REVERSE`] to scan rows bottom-to-top. Takes effect on
/// the readout path, no RAM rewrite needed.
pub const SET_COM_OUT_DIR: u8 = 0xC0;

/// Bit selecting reversed COM scan direction
pub const COM_SCAN_REVERSE: u8 = 0x08;

/// COM pins hardware configuration command (0xDA)
///
/// Followed by one byte: 0x02 for sequential, 0x12 for alternative wiring.
pub const SET_COM_PIN_CFG: u8 = 0xDA;

// Timing and driving scheme commands

/// Display clock divide ratio / oscillator frequency command (0xD5)
pub const SET_DISP_CLK_DIV: u8 = 0xD5;

/// Pre-charge period command (0xD9)
///
/// Followed by one byte; the value depends on whether an external Vcc
/// supply is used.
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOMH deselect level command (0xDB)
pub const SET_VCOM_DESEL: u8 = 0xDB;

/// Charge pump setting command (0x8D)
///
/// Followed by [`CHARGE_PUMP_ON`] when running from the internal pump, or
/// [`CHARGE_PUMP_OFF`] when an external Vcc supply is wired.
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enabled (internal supply)
pub const CHARGE_PUMP_ON: u8 = 0x14;

/// Charge pump disabled (external Vcc)
pub const CHARGE_PUMP_OFF: u8 = 0x10;

/// Physical column offset of the visible area
///
/// The controller RAM is 132 columns wide but common panels wire the
/// center 128, so column addressing starts at this fixed offset. Applied
/// to every column address command; not configurable.
pub const COLUMN_OFFSET: u8 = 2;
