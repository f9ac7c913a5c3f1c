//! Single-page driver for hosts without room for a full framebuffer.

use log::trace;

use crate::color::Color;
use crate::framebuffer::PageBuffer;
use crate::graphics::text::{TextRender, TextState};
use crate::graphics::Canvas;
use crate::interface::BusTransport;

use super::Driver;

/// What happens when a write lands outside the active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagingMode {
    /// Drop the write. The caller renders the scene once per page,
    /// switching with [`Ssd1306Paged::set_page`].
    #[default]
    Manual,
    /// Flush the pending window, clear the strip, switch to the write's
    /// page, then apply the write.
    Automatic,
}

/// SSD1306 driver buffering one 8-row page at a time.
///
/// Only the dirty column window of the active page is shipped by
/// [`Ssd1306Paged::flush`]. Drawing stays infallible: a transport failure
/// raised by an automatic page switch is held back and returned by the next
/// explicit `flush`.
pub struct Ssd1306Paged<'f, B: BusTransport> {
    driver: Driver<B>,
    buffer: PageBuffer,
    mode: PagingMode,
    deferred: Option<B::Error>,
    text: TextState<'f>,
}

impl<'f, B: BusTransport> Ssd1306Paged<'f, B> {
    pub fn new(bus: B, address: u8, width: u8, height: u8, mode: PagingMode) -> Self {
        Self {
            driver: Driver::new(bus, address),
            buffer: PageBuffer::new(width, height),
            mode,
            deferred: None,
            text: TextState::default(),
        }
    }

    /// Run the panel power-on sequence and blank the whole canvas.
    pub fn init(&mut self) -> Result<(), B::Error> {
        self.driver
            .initialize(self.buffer.width(), self.buffer.height())?;
        self.clear_screen()
    }

    /// The page the strip currently buffers.
    pub fn active_page(&self) -> u8 {
        self.buffer.page()
    }

    pub fn paging_mode(&self) -> PagingMode {
        self.mode
    }

    pub fn set_paging_mode(&mut self, mode: PagingMode) {
        self.mode = mode;
    }

    /// Retarget the strip at `page`: the buffer is cleared and nothing is
    /// pending afterwards. Pending writes are not transmitted; call
    /// [`Ssd1306Paged::flush`] first to keep them.
    pub fn set_page(&mut self, page: u8) {
        self.buffer.reset_to(page);
    }

    /// Ship the dirty column window of the active page, then mark the
    /// strip clean.
    ///
    /// Returns any failure deferred from an automatic page switch before
    /// transmitting anything new.
    pub fn flush(&mut self) -> Result<(), B::Error> {
        if let Some(error) = self.deferred.take() {
            return Err(error);
        }
        self.flush_pending()
    }

    /// Stream zeros over the whole canvas and reset the strip.
    pub fn clear_screen(&mut self) -> Result<(), B::Error> {
        let width = self.buffer.width();
        let pages = ((self.buffer.height() as u16 + 7) / 8) as u8;
        if width == 0 || pages == 0 {
            return Ok(());
        }
        self.driver.set_window((0, pages - 1), (0, width - 1))?;
        self.driver
            .send_data(core::iter::repeat(0).take(width as usize * pages as usize))?;
        self.buffer.reset_to(self.buffer.page());
        Ok(())
    }

    fn flush_pending(&mut self) -> Result<(), B::Error> {
        let page = self.buffer.page();
        let Some((start, bytes)) = self.buffer.dirty_bytes() else {
            return Ok(());
        };
        let end = start + (bytes.len() - 1) as u8;
        trace!("page {} flush: columns {}..={}", page, start, end);
        self.driver.set_window((page, page), (start, end))?;
        self.driver.send_data(bytes.iter().copied())?;
        self.buffer.reset_window();
        Ok(())
    }

    /// Switch to `page` for an automatic-mode write, flushing what the old
    /// page had pending. Transport failures are deferred.
    fn switch_page(&mut self, page: u8) {
        trace!("automatic page switch {} -> {}", self.buffer.page(), page);
        if let Err(error) = self.flush_pending() {
            if self.deferred.is_none() {
                self.deferred = Some(error);
            }
        }
        self.buffer.reset_to(page);
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

    /// Give the bus handle back.
    pub fn release(self) -> B {
        self.driver.release()
    }
}

impl<B: BusTransport> Canvas for Ssd1306Paged<'_, B> {
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
        if x < 0 || y < 0 || x >= self.buffer.width() as i16 || y >= self.buffer.height() as i16 {
            return;
        }
        if !self.buffer.contains_row(y) {
            match self.mode {
                PagingMode::Manual => return,
                PagingMode::Automatic => self.switch_page((y >> 3) as u8),
            }
        }
        self.buffer.set_pixel(x, y, color);
    }

    fn hline(&mut self, x0: i16, y: i16, x1: i16, color: Color) {
        let height = self.buffer.height();
        if height == 0 || self.buffer.width() == 0 {
            return;
        }
        let y = y.clamp(0, height as i16 - 1);
        if !self.buffer.contains_row(y) {
            match self.mode {
                PagingMode::Manual => return,
                PagingMode::Automatic => self.switch_page((y >> 3) as u8),
            }
        }
        self.buffer.hline(x0, y, x1, color);
    }

    fn vline(&mut self, x: i16, y0: i16, y1: i16, color: Color) {
        let (width, height) = (self.buffer.width(), self.buffer.height());
        if width == 0 || height == 0 {
            return;
        }
        let x = x.clamp(0, width as i16 - 1);
        let mut y0 = y0.clamp(0, height as i16 - 1);
        let mut y1 = y1.clamp(0, height as i16 - 1);
        if y0 > y1 {
            core::mem::swap(&mut y0, &mut y1);
        }
        // Row by row so the page policy applies at each boundary crossing.
        for y in y0..=y1 {
            self.draw_pixel(x, y, color);
        }
    }
}

impl<'f, B: BusTransport> TextRender<'f> for Ssd1306Paged<'f, B> {
    fn text_state(&self) -> &TextState<'f> {
        &self.text
    }

    fn text_state_mut(&mut self) -> &mut TextState<'f> {
        &mut self.text
    }
}

impl<B: BusTransport> core::fmt::Write for Ssd1306Paged<'_, B> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_text(s);
        Ok(())
    }
}
