//! Display controllers.
//!
//! [`Driver`] owns the bus handle and speaks the controller's command
//! protocol; the two display types layer pixel storage on top of it:
//!
//! - [`Ssd1306`] buffers the whole canvas and ships it with
//!   [`Ssd1306::display`].
//! - [`Ssd1306Paged`] buffers a single 8-row page and ships only the dirty
//!   column window with [`Ssd1306Paged::flush`], for hosts that cannot
//!   afford a full framebuffer.

mod buffered;
mod paged;

pub use buffered::Ssd1306;
pub use paged::{PagingMode, Ssd1306Paged};

use log::debug;

use crate::command;
use crate::interface::BusTransport;
use crate::transfer;

/// Command-level access to an SSD1306 behind a [`BusTransport`].
pub struct Driver<B> {
    bus: B,
    address: u8,
}

impl<B: BusTransport> Driver<B> {
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Device bus address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus handle back.
    pub fn release(self) -> B {
        self.bus
    }

    pub fn send_command(&mut self, command: u8) -> Result<(), B::Error> {
        transfer::send_command(&mut self.bus, self.address, command)
    }

    pub fn send_command_list(&mut self, list: &[u8]) -> Result<(), B::Error> {
        transfer::send_command_list(&mut self.bus, self.address, list)
    }

    pub fn send_data<I>(&mut self, data: I) -> Result<(), B::Error>
    where
        I: IntoIterator<Item = u8>,
    {
        transfer::send_data(&mut self.bus, self.address, data)
    }

    /// Address the page/column window the next data stream will fill.
    pub fn set_window(&mut self, pages: (u8, u8), columns: (u8, u8)) -> Result<(), B::Error> {
        transfer::send_window(&mut self.bus, self.address, pages, columns)
    }

    /// Run the power-on sequence for a `width x height` canvas as one
    /// chunked command-list transmission.
    pub fn initialize(&mut self, width: u8, height: u8) -> Result<(), B::Error> {
        debug!("initializing ssd1306 {}x{}", width, height);
        let pages = ((height as u16 + 7) / 8) as u8;
        let com_pins = if width == 128 && height == 64 { 0x12 } else { 0x02 };
        let sequence = [
            command::DISPLAY_OFF,
            command::MUX_RATIO,
            height.wrapping_sub(1),
            command::SET_PAGE_ADDRESS,
            0,
            pages.wrapping_sub(1),
            command::SET_COLUMN_ADDRESS,
            0,
            width.wrapping_sub(1),
            command::DISPLAY_OFFSET,
            0x00,
            command::SET_START_LINE,
            command::SEGMENT_REMAP_NORMAL,
            command::COM_SCAN_NORMAL,
            command::COM_PINS_CONFIGURATION,
            com_pins,
            command::MEMORY_ADDRESSING_MODE,
            0x00,
            command::CONTRAST,
            0xF7,
            command::ENTIRE_DISPLAY_RESUME,
            command::DISPLAY_NORMAL,
            command::SET_CLOCK_DIV,
            0x80,
            command::CHARGE_PUMP,
            0x14,
            command::SET_PRE_CHARGE,
            0x22,
            command::DEACTIVATE_SCROLL,
            command::DISPLAY_ON,
        ];
        self.send_command_list(&sequence)
    }

    /// Wake from or enter sleep mode.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), B::Error> {
        self.send_command(if on {
            command::DISPLAY_ON
        } else {
            command::DISPLAY_OFF
        })
    }

    /// Invert the lit/unlit polarity of the whole panel.
    pub fn invert_display(&mut self, invert: bool) -> Result<(), B::Error> {
        self.send_command(if invert {
            command::DISPLAY_INVERSE
        } else {
            command::DISPLAY_NORMAL
        })
    }

    /// Flip the panel vertically by remapping the COM scan direction.
    pub fn flip_vertically(&mut self, flip: bool) -> Result<(), B::Error> {
        self.send_command(if flip {
            command::COM_SCAN_REVERSED
        } else {
            command::COM_SCAN_NORMAL
        })
    }

    /// Set panel contrast, 0 (dimmest) to 255.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), B::Error> {
        self.send_command_list(&[command::CONTRAST, contrast])
    }
}
