//! Buffered I2C driver for SSD1306 monochrome OLED displays.
//!
//! The panel's pixels live in a local packed framebuffer; drawing mutates
//! only that buffer, and an explicit flush ships it over the bus in
//! transactions that respect the transport's payload limit. Two drivers
//! share the drawing surface:
//!
//! - [`Ssd1306`] buffers the whole canvas and sends it with
//!   [`Ssd1306::display`].
//! - [`Ssd1306Paged`] buffers one 8-row page and sends only the columns
//!   touched since the last [`Ssd1306Paged::flush`].
//!
//! Shapes come from the [`Graphics`] trait, text from [`TextRender`] with a
//! caller-supplied glyph table, and `embedded-graphics` primitives draw
//! straight into either driver (`graphics` feature, on by default).
//!
//! ```no_run
//! use ssd1306_i2c::{Color, Graphics, I2cTransport, Ssd1306};
//! # fn run<I: embedded_hal::i2c::I2c>(i2c: I) -> Result<(), ssd1306_i2c::TransportError<I::Error>> {
//! let mut display = Ssd1306::new(I2cTransport::new(i2c), 0x3C, 128, 64);
//! display.init()?;
//! display.draw_circle(64, 32, 20, Color::On);
//! display.display()?;
//! # Ok(())
//! # }
//! ```

#![no_std]

extern crate alloc;

pub mod color;
pub mod command;
pub mod display;
pub mod font;
pub mod framebuffer;
pub mod graphics;
pub mod interface;
pub mod transfer;

pub use color::Color;
pub use display::{Driver, PagingMode, Ssd1306, Ssd1306Paged};
pub use font::{Font, Glyph};
pub use framebuffer::{DirtyWindow, Framebuffer, PageBuffer};
pub use graphics::text::{TextRender, TextState, TextStyle};
pub use graphics::{Canvas, Graphics, Quadrant};
pub use interface::{BusTransport, I2cTransport, TransportError};
