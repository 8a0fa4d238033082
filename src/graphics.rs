//! Graphics support via embedded-graphics
//!
//! This module implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait for
//! [`Display`], so line, rectangle, ellipse and text rasterization come from
//! the embedded-graphics ecosystem and land in the driver's framebuffer.
//! Coordinates are logical (post-rotation); pixels outside the logical
//! bounds are skipped silently, like every other drawing path in this
//! driver.
//!
//! Monochrome glyph rendering keeps the "only set bits draw" property:
//! `MonoTextStyle` without a background color emits only the on pixels of
//! each glyph, so text never clears pixels that were already lit.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{MonoTextStyle, ascii::FONT_6X10},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//! use sh1106::{Builder, Dimensions, Display};
//! # struct MockInterface;
//! # impl sh1106::DisplayInterface for MockInterface {
//! #     type Error = core::convert::Infallible;
//! #     fn send_command(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn reset<D: embedded_hal::delay::DelayNs>(
//! #         &mut self,
//! #         _delay: &mut D,
//! #     ) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut display = Display::new(MockInterface, config);
//!
//! let _ = Circle::new(Point::new(32, 16), 30)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello",
//!     Point::new(70, 32),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut display);
//!
//! let _ = display.show(false);
//! ```

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::prelude::Pixel;

use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let dims = self.logical_dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions, Rotation};
    use embedded_graphics::Drawable;
    use embedded_graphics::geometry::Dimensions as _;
    use embedded_graphics::mono_font::MonoTextStyle;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle, Rectangle};
    use embedded_graphics::text::Text;
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = Infallible;

        fn send_command(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_display(rotation: Rotation) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .rotation(rotation)
            .build()
            .unwrap();
        Display::new(MockInterface, config)
    }

    #[test]
    fn size_follows_logical_orientation() {
        assert_eq!(test_display(Rotation::Rotate0).size(), Size::new(128, 64));
        assert_eq!(test_display(Rotation::Rotate90).size(), Size::new(64, 128));
        assert_eq!(test_display(Rotation::Rotate180).size(), Size::new(128, 64));
    }

    #[test]
    fn filled_rectangle_sets_framebuffer_pixels() {
        let mut display = test_display(Rotation::Rotate0);
        Rectangle::new(Point::new(2, 2), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        for y in 2..5 {
            for x in 2..5 {
                assert!(display.get_pixel(x, y));
            }
        }
        assert!(!display.get_pixel(1, 2));
        assert!(!display.get_pixel(5, 2));
    }

    #[test]
    fn horizontal_line_draws_expected_pixels() {
        let mut display = test_display(Rotation::Rotate0);
        Line::new(Point::new(0, 10), Point::new(5, 10))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();

        for x in 0..=5 {
            assert!(display.get_pixel(x, 10));
        }
        assert!(!display.get_pixel(6, 10));
    }

    #[test]
    fn drawing_past_the_edge_clips_silently() {
        let mut display = test_display(Rotation::Rotate0);
        Line::new(Point::new(-10, -10), Point::new(200, 100))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();
        // Some of the line landed in bounds, the rest was dropped
        assert!(display.framebuffer().data().iter().any(|b| *b != 0));
    }

    #[test]
    fn transparent_text_never_clears_lit_pixels() {
        let mut display = test_display(Rotation::Rotate0);
        display.fill(true);

        Text::new(
            "Ag",
            Point::new(4, 20),
            MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
        )
        .draw(&mut display)
        .unwrap();

        // Glyph off pixels are transparent, so the all-on background survives
        assert!(display.framebuffer().data().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn rotated_target_reports_rotated_bounding_box() {
        let display = test_display(Rotation::Rotate270);
        let bounds = display.bounding_box();
        assert_eq!(bounds.size, Size::new(64, 128));
    }
}
