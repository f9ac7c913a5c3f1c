//! `embedded-graphics` integration.
//!
//! Both drivers implement `DrawTarget` over `BinaryColor`, so the whole
//! embedded-graphics primitive and text ecosystem can render into the local
//! buffer; flushing to the panel stays explicit. Drawing is infallible:
//! out-of-canvas pixels are skipped, matching the crate's clipping policy.

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use crate::color::Color;
use crate::display::{Ssd1306, Ssd1306Paged};
use crate::graphics::Canvas;
use crate::interface::BusTransport;

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        if color.is_on() {
            Color::On
        } else {
            Color::Off
        }
    }
}

impl<B: BusTransport> OriginDimensions for Ssd1306<'_, B> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<B: BusTransport> DrawTarget for Ssd1306<'_, B> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (i16::try_from(point.x), i16::try_from(point.y)) {
                self.draw_pixel(x, y, color.into());
            }
        }
        Ok(())
    }
}

impl<B: BusTransport> OriginDimensions for Ssd1306Paged<'_, B> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<B: BusTransport> DrawTarget for Ssd1306Paged<'_, B> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (i16::try_from(point.x), i16::try_from(point.y)) {
                self.draw_pixel(x, y, color.into());
            }
        }
        Ok(())
    }
}
