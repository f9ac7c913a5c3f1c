//! Full-canvas buffered driver.

use log::trace;

use crate::color::Color;
use crate::framebuffer::Framebuffer;
use crate::graphics::text::{TextRender, TextState};
use crate::graphics::Canvas;
use crate::interface::BusTransport;

use super::Driver;

/// SSD1306 driver holding the whole canvas in memory.
///
/// Drawing mutates only the local framebuffer; [`Ssd1306::display`] ships
/// the complete canvas to the panel. Drawing calls never fail (out-of-range
/// coordinates clip, unsupported glyphs skip), so only `init`, `display`
/// and the control commands return a transport result.
pub struct Ssd1306<'f, B: BusTransport> {
    driver: Driver<B>,
    buffer: Framebuffer,
    text: TextState<'f>,
}

impl<'f, B: BusTransport> Ssd1306<'f, B> {
    /// Create a driver for a `width x height` panel at `address`.
    ///
    /// The framebuffer is allocated here and never resized.
    pub fn new(bus: B, address: u8, width: u8, height: u8) -> Self {
        Self {
            driver: Driver::new(bus, address),
            buffer: Framebuffer::new(width, height),
            text: TextState::default(),
        }
    }

    /// Run the panel power-on sequence, then clear and ship the canvas.
    pub fn init(&mut self) -> Result<(), B::Error> {
        self.driver
            .initialize(self.buffer.width(), self.buffer.height())?;
        self.buffer.clear();
        self.display()
    }

    /// Ship the whole framebuffer to the panel.
    pub fn display(&mut self) -> Result<(), B::Error> {
        let pages = self.buffer.pages();
        if pages == 0 || self.buffer.width() == 0 {
            return Ok(());
        }
        self.driver
            .set_window((0, pages - 1), (0, self.buffer.width() - 1))?;
        trace!("display flush: {} bytes", self.buffer.as_bytes().len());
        self.driver.send_data(self.buffer.as_bytes().iter().copied())
    }

    pub fn set_display_on(&mut self, on: bool) -> Result<(), B::Error> {
        self.driver.set_display_on(on)
    }

    pub fn invert_display(&mut self, invert: bool) -> Result<(), B::Error> {
        self.driver.invert_display(invert)
    }

    pub fn flip_vertically(&mut self, flip: bool) -> Result<(), B::Error> {
        self.driver.flip_vertically(flip)
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), B::Error> {
        self.driver.set_contrast(contrast)
    }

    /// Raw framebuffer bytes in page order.
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Give the bus handle back.
    pub fn release(self) -> B {
        self.driver.release()
    }
}

impl<B: BusTransport> Canvas for Ssd1306<'_, B> {
    fn width(&self) -> u8 {
        self.buffer.width()
    }

    fn height(&self) -> u8 {
        self.buffer.height()
    }

    fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    fn draw_pixel(&mut self, x: i16, y: i16, color: Color) {
        self.buffer.set_pixel(x, y, color);
    }

    fn hline(&mut self, x0: i16, y: i16, x1: i16, color: Color) {
        self.buffer.hline(x0, y, x1, color);
    }

    fn vline(&mut self, x: i16, y0: i16, y1: i16, color: Color) {
        self.buffer.vline(x, y0, y1, color);
    }
}

impl<'f, B: BusTransport> TextRender<'f> for Ssd1306<'f, B> {
    fn text_state(&self) -> &TextState<'f> {
        &self.text
    }

    fn text_state_mut(&mut self) -> &mut TextState<'f> {
        &mut self.text
    }
}

impl<B: BusTransport> core::fmt::Write for Ssd1306<'_, B> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_text(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::Graphics;
    use crate::interface::mock::MockBus;
    use crate::interface::{COMMAND_MODE, DATA_MODE};
    use alloc::vec::Vec;

    fn data_payload(bus: &MockBus<32>) -> Vec<u8> {
        bus.transactions
            .iter()
            .filter(|t| t[0] == DATA_MODE)
            .flat_map(|t| t.iter().skip(1).copied())
            .collect()
    }

    #[test]
    fn display_addresses_the_full_canvas_then_streams_it() {
        let mut display = Ssd1306::new(MockBus::<32>::new(), 0x3C, 8, 8);
        display.hline(0, 0, 7, Color::On);
        display.display().unwrap();

        let bus = display.release();
        // One window command for page 0, columns 0..=7.
        assert_eq!(
            bus.transactions[0],
            alloc::vec![COMMAND_MODE, 0x22, 0, 0, 0x21, 0, 7]
        );
        // Exactly eight data bytes, each column's row-0 bit set.
        assert_eq!(bus.transactions[1][0], DATA_MODE);
        assert_eq!(&bus.transactions[1][1..], &[0x01; 8]);
        assert_eq!(bus.transactions.len(), 2);
    }

    #[test]
    fn display_streams_exactly_the_window_byte_count() {
        let mut display = Ssd1306::new(MockBus::<32>::new(), 0x3C, 128, 64);
        display.display().unwrap();
        let bus = display.release();
        assert_eq!(data_payload(&bus).len(), 128 * 8);
        // 1024 payload bytes at 31 per transaction, plus the window command.
        assert_eq!(bus.transactions.len(), 1 + 1024usize.div_ceil(31));
    }

    #[test]
    fn init_brings_the_panel_up_then_clears_it() {
        let mut display = Ssd1306::new(MockBus::<32>::new(), 0x3C, 8, 8);
        display.draw_pixel(1, 1, Color::On);
        display.init().unwrap();

        assert!(display.buffer().iter().all(|&b| b == 0));
        let bus = display.release();
        let data = data_payload(&bus);
        assert_eq!(data.len(), 8);
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn odd_heights_stream_the_rounded_up_page_count() {
        let mut display = Ssd1306::new(MockBus::<32>::new(), 0x3C, 10, 12);
        display.display().unwrap();
        let bus = display.release();
        assert_eq!(
            bus.transactions[0],
            alloc::vec![COMMAND_MODE, 0x22, 0, 1, 0x21, 0, 9]
        );
        assert_eq!(data_payload(&bus).len(), 20);
    }

    #[test]
    fn text_renders_through_the_canvas_and_tracks_the_cursor() {
        // 'A'..'A' table: width 2, height 3, both rows-and-columns pattern.
        let mut table = alloc::vec![0u8; 8];
        table[0x02] = b'A';
        table[0x04] = b'A';
        table[0x06] = 3;
        table.extend_from_slice(&[2, 12, 0, 0]);
        table.extend_from_slice(&[0b01, 0b10, 0b11]);

        let mut display = Ssd1306::new(MockBus::<32>::new(), 0x3C, 16, 8);
        display.set_font(&table);
        display.draw_text("A", Color::On);

        assert_eq!(display.cursor(), (2 + 1, 0));
        // Glyph pattern: (0,0), (1,1), (0,2), (1,2).
        assert_eq!(display.buffer()[0], 0b101);
        assert_eq!(display.buffer()[1], 0b110);
    }

    #[test]
    fn write_macro_uses_the_configured_color() {
        use core::fmt::Write;

        let mut table = alloc::vec![0u8; 8];
        table[0x02] = b'0';
        table[0x04] = b'9';
        table[0x06] = 7;
        for i in 0..10u8 {
            table.extend_from_slice(&[5, 48 + i * 7, 0, 0]);
        }
        table.resize(48 + 70, 0);

        let mut display = Ssd1306::new(MockBus::<32>::new(), 0x3C, 64, 16);
        display.set_font(&table);
        write!(display, "{}", 42).unwrap();
        assert_eq!(display.cursor(), (2 * (5 + 1), 0));
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn embedded_graphics_primitives_land_in_the_buffer() {
        use embedded_graphics::pixelcolor::BinaryColor;
        use embedded_graphics::prelude::*;
        use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

        let mut display = Ssd1306::new(MockBus::<32>::new(), 0x3C, 16, 16);
        Rectangle::new(Point::new(3, 2), Size::new(5, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        let mut reference = Ssd1306::new(MockBus::<32>::new(), 0x3C, 16, 16);
        reference.fill_rect(3, 2, 5, 4, Color::On);
        assert_eq!(display.buffer(), reference.buffer());
    }
}
