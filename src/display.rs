//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{
    CHARGE_PUMP_OFF, CHARGE_PUMP_ON, COLUMN_OFFSET, COM_SCAN_REVERSE, HIGH_COLUMN_ADDRESS,
    LOW_COLUMN_ADDRESS, SEG_REMAP_REVERSE, SET_CHARGE_PUMP, SET_COM_OUT_DIR, SET_COM_PIN_CFG,
    SET_CONTRAST, SET_DISP, SET_DISP_CLK_DIV, SET_DISP_OFFSET, SET_DISP_START_LINE, SET_ENTIRE_ON,
    SET_MEM_ADDR, SET_MUX_RATIO, SET_NORM_INV, SET_PAGE_ADDRESS, SET_PRECHARGE, SET_SEG_REMAP,
    SET_VCOM_DESEL,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::framebuffer::{BUF_LEN, Framebuffer};
use crate::interface::DisplayInterface;
use crate::rotation::{mirror_flags, transpose};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Controller session for an SH1106-class OLED panel
///
/// Owns the framebuffer, the per-page dirty cache and the device session
/// state (contrast, inversion, sleep, flip), and translates them into
/// command and data transactions on the [`DisplayInterface`].
///
/// Drawing happens in logical (post-rotation) coordinates through
/// [`set_pixel`](Self::set_pixel) and friends, or through embedded-graphics
/// when the `graphics` feature is enabled; nothing reaches the panel until
/// [`show`](Self::show) is called.
///
/// A session exclusively owns its buffers and state. There is no internal
/// synchronization and no process-wide registry; each instance is
/// independently constructible and destructible.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Logical-orientation pixel buffer
    framebuffer: Framebuffer,
    /// Physical-orientation bitmap, rebuilt before every transfer when the
    /// rotation requires a software transpose
    staged: [u8; BUF_LEN],
    /// Last transmitted bytes per page; entries update only after a
    /// successful transmission
    cache: [u8; BUF_LEN],
    /// Runtime 180-degree offset on top of the fixed rotation
    flipped: bool,
    /// Current contrast level
    contrast: u8,
    /// Whether the display is inverted
    inverted: bool,
    /// Whether the panel is switched off
    asleep: bool,
    /// Whether `init_display` has run
    initialized: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The session starts uninitialized with the panel assumed off; call
    /// [`init_display`](Self::init_display) before drawing.
    pub fn new(interface: I, config: Config) -> Self {
        let framebuffer = Framebuffer::new(config.logical_dimensions());
        let flipped = config.rotation.base_flip();
        let contrast = config.contrast;
        Self {
            interface,
            config,
            framebuffer,
            staged: [0; BUF_LEN],
            cache: [0; BUF_LEN],
            flipped,
            contrast,
            inverted: false,
            asleep: true,
            initialized: false,
        }
    }

    /// Perform hardware reset and run the controller initialization sequence
    ///
    /// Sends the fixed register setup (addressing mode, start line, mirror
    /// flags for the current orientation and flip state, multiplex ratio,
    /// display offset, COM wiring, clock, pre-charge and charge pump
    /// according to the supply configuration, contrast), switches the panel
    /// on, clears the framebuffer and pushes it with a full refresh.
    pub fn init_display<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.reset(delay)?;

        let dims = self.config.dimensions;
        // Alternative COM wiring for square-ish panels, sequential for wide ones
        let com_pin_cfg: u8 = if dims.width > 2 * dims.height { 0x02 } else { 0x12 };
        let precharge: u8 = if self.config.external_vcc { 0x22 } else { 0xF1 };
        let charge_pump = if self.config.external_vcc {
            CHARGE_PUMP_OFF
        } else {
            CHARGE_PUMP_ON
        };

        self.send_command(&[SET_DISP])?;
        self.send_command(&[SET_MEM_ADDR, 0x00])?;
        self.send_command(&[SET_DISP_START_LINE])?;
        self.send_mirror_flags()?;
        self.send_command(&[SET_MUX_RATIO, (dims.height - 1) as u8])?;
        self.send_command(&[SET_DISP_OFFSET, 0x00])?;
        self.send_command(&[SET_COM_PIN_CFG, com_pin_cfg])?;
        self.send_command(&[SET_DISP_CLK_DIV, 0x80])?;
        self.send_command(&[SET_PRECHARGE, precharge])?;
        self.send_command(&[SET_VCOM_DESEL, 0x30])?;
        self.send_command(&[SET_CONTRAST, self.contrast])?;
        self.send_command(&[SET_ENTIRE_ON])?;
        self.send_command(&[SET_NORM_INV | u8::from(self.inverted)])?;
        self.send_command(&[SET_CHARGE_PUMP, charge_pump])?;
        self.poweron(delay)?;

        self.framebuffer.fill(false);
        self.initialized = true;
        debug!(
            "initialized {}x{} panel, rotation {:?}",
            dims.width, dims.height, self.config.rotation
        );
        self.show(true)
    }

    /// Push the framebuffer to the panel
    ///
    /// Walks the controller pages in ascending order. A page whose bytes
    /// match the last transmitted copy is skipped entirely unless
    /// `full_update` is set; a changed page is addressed (page plus the
    /// fixed column offset) and streamed as one data write, and its cache
    /// entry updated. For 90/270-degree rotations the framebuffer is first
    /// remapped into physical orientation, which costs time proportional to
    /// the pixel count.
    pub fn show(&mut self, full_update: bool) -> DisplayResult<I> {
        let physical = self.config.dimensions;
        let width = usize::from(physical.width);
        let pages = usize::from(physical.pages());
        let transposed = self.config.rotation.is_transposed();
        if transposed {
            transpose(&self.framebuffer, physical, self.flipped, &mut self.staged);
        }

        let Self {
            interface,
            framebuffer,
            staged,
            cache,
            ..
        } = self;
        let source: &[u8] = if transposed {
            &staged[..pages * width]
        } else {
            framebuffer.data()
        };

        let mut sent = 0usize;
        for page in 0..pages {
            let row = &source[page * width..(page + 1) * width];
            let snapshot = &mut cache[page * width..(page + 1) * width];
            if !full_update && row == &snapshot[..] {
                continue;
            }
            interface
                .send_command(&[
                    SET_PAGE_ADDRESS | page as u8,
                    LOW_COLUMN_ADDRESS | (COLUMN_OFFSET & 0x0F),
                    HIGH_COLUMN_ADDRESS | (COLUMN_OFFSET >> 4),
                ])
                .map_err(Error::Interface)?;
            interface.send_data(row).map_err(Error::Interface)?;
            snapshot.copy_from_slice(row);
            sent += 1;
        }
        trace!("show: transmitted {sent}/{pages} pages");
        Ok(())
    }

    /// Switch the panel on
    ///
    /// Waits the configured power-on delay afterwards. Does not touch the
    /// charge pump or RAM contents.
    pub fn poweron<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(&[SET_DISP | 0x01])?;
        if self.config.power_on_delay_ms > 0 {
            delay.delay_ms(self.config.power_on_delay_ms);
        }
        self.asleep = false;
        Ok(())
    }

    /// Switch the panel off (sleep)
    ///
    /// RAM contents survive; drawing and `show` stay legal but have no
    /// visible effect until the panel is woken.
    pub fn poweroff(&mut self) -> DisplayResult<I> {
        self.send_command(&[SET_DISP])?;
        self.asleep = true;
        Ok(())
    }

    /// Enter or leave sleep
    ///
    /// `sleep(true)` is [`poweroff`](Self::poweroff), `sleep(false)` is
    /// [`poweron`](Self::poweron).
    pub fn sleep<D: DelayNs>(&mut self, value: bool, delay: &mut D) -> DisplayResult<I> {
        if value { self.poweroff() } else { self.poweron(delay) }
    }

    /// Set the contrast level, effective immediately
    pub fn contrast(&mut self, level: u8) -> DisplayResult<I> {
        self.send_command(&[SET_CONTRAST, level])?;
        self.contrast = level;
        Ok(())
    }

    /// Set normal or inverted display, effective immediately
    ///
    /// Inversion happens on the readout path; no `show` is needed.
    pub fn invert(&mut self, invert: bool) -> DisplayResult<I> {
        self.send_command(&[SET_NORM_INV | u8::from(invert)])?;
        self.inverted = invert;
        Ok(())
    }

    /// Set or toggle the 180-degree flip
    ///
    /// `Some(value)` sets the flip state, `None` toggles it. In the native
    /// orientation family the mirror flags are resent; in the transposed
    /// family the flip changes the transpose direction instead. With
    /// `update` set, the full framebuffer is retransmitted so the panel
    /// reflects the new state (the segment remap affects how RAM writes
    /// land, so a partial update would tear).
    pub fn flip(&mut self, flag: Option<bool>, update: bool) -> DisplayResult<I> {
        self.flipped = flag.unwrap_or(!self.flipped);
        if !self.config.rotation.is_transposed() {
            self.send_mirror_flags()?;
        }
        if update {
            self.show(true)?;
        }
        Ok(())
    }

    /// Perform hardware reset sequencing
    ///
    /// No-op if the interface has no reset line configured.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay).map_err(Error::Interface)
    }

    /// Read a pixel from the framebuffer, logical coordinates
    ///
    /// Out-of-bounds reads return off.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.framebuffer.get_pixel(x, y)
    }

    /// Write a pixel to the framebuffer, logical coordinates
    ///
    /// Out-of-bounds writes are silently dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.framebuffer.set_pixel(x, y, on);
    }

    /// Fill the framebuffer with one value
    pub fn fill(&mut self, on: bool) {
        self.framebuffer.fill(on);
    }

    /// Blit a bitmap into the framebuffer
    ///
    /// See [`Framebuffer::blit`].
    pub fn blit(
        &mut self,
        src: &Framebuffer,
        x: i32,
        y: i32,
        transparent_key: Option<bool>,
        palette: Option<[bool; 2]>,
    ) {
        self.framebuffer.blit(src, x, y, transparent_key, palette);
    }

    /// Scroll the framebuffer contents
    ///
    /// See [`Framebuffer::scroll`].
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.framebuffer.scroll(dx, dy);
    }

    /// Get physical display dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Get logical (post-rotation) dimensions
    pub fn logical_dimensions(&self) -> Dimensions {
        self.config.logical_dimensions()
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Access the framebuffer mutably
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Whether the panel is currently switched off
    pub fn is_asleep(&self) -> bool {
        self.asleep
    }

    /// Whether `init_display` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn send_mirror_flags(&mut self) -> DisplayResult<I> {
        let (seg_remap, reverse_scan) = mirror_flags(self.config.rotation, self.flipped);
        self.send_command(&[
            SET_SEG_REMAP | if seg_remap { SEG_REMAP_REVERSE } else { 0 },
            SET_COM_OUT_DIR | if reverse_scan { COM_SCAN_REVERSE } else { 0 },
        ])
    }

    /// Send a command sequence to the display controller
    fn send_command(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        self.interface.send_command(bytes).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Op {
        Command(Vec<u8>),
        Data(Vec<u8>),
    }

    #[derive(Debug)]
    struct MockInterface {
        ops: Vec<Op>,
        resets: usize,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                ops: Vec::new(),
                resets: 0,
            }
        }

        fn data_ops(&self) -> Vec<&Vec<u8>> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Data(bytes) => Some(bytes),
                    Op::Command(_) => None,
                })
                .collect()
        }

        fn command_ops(&self) -> Vec<&Vec<u8>> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Command(bytes) => Some(bytes),
                    Op::Data(_) => None,
                })
                .collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            self.ops.push(Op::Command(bytes.to_vec()));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.ops.push(Op::Data(data.to_vec()));
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.resets += 1;
            Ok(())
        }
    }

    struct MockDelay {
        ms: Vec<u32>,
    }

    impl MockDelay {
        fn new() -> Self {
            Self { ms: Vec::new() }
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.ms.push(ns / 1_000_000);
        }
    }

    fn test_display(rotation: Rotation) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .rotation(rotation)
            .build()
            .unwrap();
        Display::new(MockInterface::new(), config)
    }

    #[test]
    fn init_resets_configures_and_pushes_all_pages() {
        let mut display = test_display(Rotation::Rotate0);
        let mut delay = MockDelay::new();
        display.init_display(&mut delay).unwrap();

        assert_eq!(display.interface.resets, 1);
        assert!(display.is_initialized());
        assert!(!display.is_asleep());

        let commands = display.interface.command_ops();
        assert_eq!(commands[0], &alloc::vec![SET_DISP]);
        assert!(commands.contains(&&alloc::vec![SET_CHARGE_PUMP, CHARGE_PUMP_ON]));
        assert!(commands.contains(&&alloc::vec![SET_MUX_RATIO, 63]));
        assert!(commands.contains(&&alloc::vec![SET_DISP | 0x01]));

        // Full refresh of a cleared buffer: one data write per page
        let data = display.interface.data_ops();
        assert_eq!(data.len(), 8);
        assert!(data.iter().all(|d| d.len() == 128));
        assert!(data.iter().all(|d| d.iter().all(|b| *b == 0)));
    }

    #[test]
    fn init_with_external_vcc_disables_charge_pump() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .external_vcc(true)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        let mut delay = MockDelay::new();
        display.init_display(&mut delay).unwrap();

        let commands = display.interface.command_ops();
        assert!(commands.contains(&&alloc::vec![SET_CHARGE_PUMP, CHARGE_PUMP_OFF]));
        assert!(commands.contains(&&alloc::vec![SET_PRECHARGE, 0x22]));
    }

    #[test]
    fn poweron_waits_the_configured_delay() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .power_on_delay_ms(5)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        let mut delay = MockDelay::new();
        display.poweron(&mut delay).unwrap();

        assert_eq!(delay.ms, alloc::vec![5]);
        assert!(!display.is_asleep());
    }

    #[test]
    fn fill_then_show_transmits_all_ones_then_nothing() {
        let mut display = test_display(Rotation::Rotate0);
        display.fill(true);
        display.show(false).unwrap();

        let data = display.interface.data_ops();
        assert_eq!(data.len(), 8);
        assert!(data.iter().all(|d| d.iter().all(|b| *b == 0xFF)));

        // Unchanged buffer: the dirty cache elides every page
        let before = display.interface.ops.len();
        display.show(false).unwrap();
        assert_eq!(display.interface.ops.len(), before);
    }

    #[test]
    fn full_update_retransmits_clean_pages() {
        let mut display = test_display(Rotation::Rotate0);
        display.show(true).unwrap();
        display.show(true).unwrap();
        assert_eq!(display.interface.data_ops().len(), 16);
    }

    #[test]
    fn single_pixel_transmits_one_page_with_offset_column_address() {
        let mut display = test_display(Rotation::Rotate0);
        display.show(false).unwrap();
        let before = display.interface.data_ops().len();

        display.set_pixel(0, 0, true);
        display.show(false).unwrap();

        let data = display.interface.data_ops();
        assert_eq!(data.len() - before, 1);
        let page = data.last().unwrap();
        assert_eq!(page[0], 0x01);
        assert!(page[1..].iter().all(|b| *b == 0));

        // Page 0, column 0 plus the fixed 2-column panel offset
        let commands = display.interface.command_ops();
        assert_eq!(
            commands.last().unwrap(),
            &&alloc::vec![SET_PAGE_ADDRESS, LOW_COLUMN_ADDRESS | 2, HIGH_COLUMN_ADDRESS]
        );
    }

    #[test]
    fn pages_transmit_in_ascending_order_without_interleaving() {
        let mut display = test_display(Rotation::Rotate0);
        display.fill(true);
        display.show(false).unwrap();

        let ops = &display.interface.ops;
        assert_eq!(ops.len(), 16);
        for page in 0..8 {
            match (&ops[page * 2], &ops[page * 2 + 1]) {
                (Op::Command(cmd), Op::Data(data)) => {
                    assert_eq!(cmd[0], SET_PAGE_ADDRESS | page as u8);
                    assert_eq!(data.len(), 128);
                }
                other => panic!("unexpected op pair {other:?}"),
            }
        }
    }

    #[test]
    fn partial_change_retransmits_only_dirty_pages() {
        let mut display = test_display(Rotation::Rotate0);
        display.fill(true);
        display.show(false).unwrap();
        let before = display.interface.data_ops().len();

        // Touch pages 1 and 6
        display.set_pixel(10, 12, false);
        display.set_pixel(100, 50, false);
        display.show(false).unwrap();

        let data = display.interface.data_ops();
        assert_eq!(data.len() - before, 2);
        let commands = display.interface.command_ops();
        let pages: Vec<u8> = commands[commands.len() - 2..]
            .iter()
            .map(|c| c[0] & 0x0F)
            .collect();
        assert_eq!(pages, alloc::vec![1, 6]);
    }

    #[test]
    fn rotated_session_swaps_logical_dimensions() {
        let display = test_display(Rotation::Rotate90);
        assert_eq!(display.dimensions(), Dimensions::new(128, 64).unwrap());
        assert_eq!(
            display.logical_dimensions(),
            Dimensions {
                width: 64,
                height: 128
            }
        );
    }

    #[test]
    fn rotate90_show_transmits_transposed_corner() {
        let mut display = test_display(Rotation::Rotate90);
        display.set_pixel(0, 0, true);
        display.show(false).unwrap();

        // Logical origin lands at the physical top-right corner
        let data = display.interface.data_ops();
        assert_eq!(data.len(), 1);
        let page = data[0];
        assert_eq!(page[127], 0x01);
        assert!(page[..127].iter().all(|b| *b == 0));
        let commands = display.interface.command_ops();
        assert_eq!(commands.last().unwrap()[0], SET_PAGE_ADDRESS);
    }

    #[test]
    fn rotate270_show_transmits_opposite_corner() {
        let mut display = test_display(Rotation::Rotate270);
        display.set_pixel(0, 0, true);
        display.show(false).unwrap();

        // Counter-clockwise map: logical origin lands bottom-left
        let data = display.interface.data_ops();
        assert_eq!(data.len(), 1);
        let page = data[0];
        assert_eq!(page[0], 0x80);
        let commands = display.interface.command_ops();
        assert_eq!(commands.last().unwrap()[0], SET_PAGE_ADDRESS | 7);
    }

    #[test]
    fn flip_toggle_is_its_own_inverse() {
        let mut display = test_display(Rotation::Rotate0);
        let base = display.flipped;
        display.flip(None, false).unwrap();
        assert_eq!(display.flipped, !base);
        display.flip(None, false).unwrap();
        assert_eq!(display.flipped, base);
    }

    #[test]
    fn flip_in_native_family_resends_mirror_flags() {
        let mut display = test_display(Rotation::Rotate0);
        display.flip(Some(true), false).unwrap();

        let commands = display.interface.command_ops();
        assert_eq!(
            commands.last().unwrap(),
            &&alloc::vec![
                SET_SEG_REMAP | SEG_REMAP_REVERSE,
                SET_COM_OUT_DIR | COM_SCAN_REVERSE
            ]
        );
    }

    #[test]
    fn rotate180_base_flags_are_mirrored() {
        let mut display = test_display(Rotation::Rotate180);
        let mut delay = MockDelay::new();
        display.init_display(&mut delay).unwrap();

        let commands = display.interface.command_ops();
        assert!(commands.contains(&&alloc::vec![
            SET_SEG_REMAP | SEG_REMAP_REVERSE,
            SET_COM_OUT_DIR | COM_SCAN_REVERSE
        ]));
    }

    #[test]
    fn flip_with_update_retransmits_everything() {
        let mut display = test_display(Rotation::Rotate0);
        display.show(false).unwrap();
        let before = display.interface.data_ops().len();
        display.flip(None, true).unwrap();
        assert_eq!(display.interface.data_ops().len() - before, 8);
    }

    #[test]
    fn flip_in_transposed_family_changes_transpose_direction() {
        let mut display = test_display(Rotation::Rotate90);
        display.set_pixel(0, 0, true);
        display.flip(None, true).unwrap();

        // Flipped 90 degrees behaves like 270: bottom-left corner
        let data = display.interface.data_ops();
        let last_page = data.last().unwrap();
        assert_eq!(last_page[0], 0x80);
        // No mirror flag commands were sent, only page addressing
        assert!(
            display
                .interface
                .command_ops()
                .iter()
                .all(|c| c[0] & 0xF0 == SET_PAGE_ADDRESS)
        );
    }

    #[test]
    fn contrast_sends_level_immediately() {
        let mut display = test_display(Rotation::Rotate0);
        display.contrast(0x7F).unwrap();
        assert_eq!(
            display.interface.command_ops().last().unwrap(),
            &&alloc::vec![SET_CONTRAST, 0x7F]
        );
    }

    #[test]
    fn invert_sends_normal_or_inverse_opcode() {
        let mut display = test_display(Rotation::Rotate0);
        display.invert(true).unwrap();
        assert_eq!(
            display.interface.command_ops().last().unwrap(),
            &&alloc::vec![SET_NORM_INV | 0x01]
        );
        display.invert(false).unwrap();
        assert_eq!(
            display.interface.command_ops().last().unwrap(),
            &&alloc::vec![SET_NORM_INV]
        );
    }

    #[test]
    fn sleep_tracks_panel_power_state() {
        let mut display = test_display(Rotation::Rotate0);
        let mut delay = MockDelay::new();

        display.sleep(false, &mut delay).unwrap();
        assert!(!display.is_asleep());
        assert_eq!(
            display.interface.command_ops().last().unwrap(),
            &&alloc::vec![SET_DISP | 0x01]
        );

        display.sleep(true, &mut delay).unwrap();
        assert!(display.is_asleep());
        assert_eq!(
            display.interface.command_ops().last().unwrap(),
            &&alloc::vec![SET_DISP]
        );
    }

    #[test]
    fn show_while_asleep_still_updates_cache() {
        let mut display = test_display(Rotation::Rotate0);
        display.poweroff().unwrap();
        display.fill(true);
        display.show(false).unwrap();
        assert_eq!(display.interface.data_ops().len(), 8);
        assert!(display.is_asleep());
    }

    #[test]
    fn scroll_marks_shifted_pages_dirty() {
        let mut display = test_display(Rotation::Rotate0);
        display.set_pixel(0, 0, true);
        display.show(false).unwrap();
        let before = display.interface.data_ops().len();

        display.scroll(1, 0);
        display.show(false).unwrap();

        // Page 0 changed shape: exactly one retransmission
        let data = display.interface.data_ops();
        assert_eq!(data.len() - before, 1);
        let page = data.last().unwrap();
        assert_eq!(page[0], 0x01);
        assert_eq!(page[1], 0x01);
    }
}
