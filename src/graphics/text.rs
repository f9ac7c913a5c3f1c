//! Glyph rendering and cursor-based text layout.
//!
//! Text state is an explicit value on the driver: cursor position plus a
//! [`TextStyle`] snapshot read by every operation. Glyphs come from the
//! [`Font`] table selected with [`TextRender::set_font`]; characters the
//! table does not cover are skipped without moving the cursor.

use crate::color::Color;
use crate::font::{Font, Glyph};
use crate::graphics::Canvas;

/// Text layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Extra pixels between lines.
    pub line_spacing: i16,
    /// Extra pixels between glyphs.
    pub letter_spacing: i16,
    /// Color used by [`TextRender::write_text`] and `core::fmt::Write`.
    pub color: Color,
    /// Integer glyph magnification; every source pixel becomes a
    /// `scale x scale` block. 0 is treated as 1.
    pub scale: u8,
    /// Horizontal shift applied to every glyph.
    pub offset_x: i16,
    /// Vertical shift applied to every glyph.
    pub offset_y: i16,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            line_spacing: 1,
            letter_spacing: 1,
            color: Color::On,
            scale: 1,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

/// Font selection, cursor, and style carried by a driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextState<'f> {
    pub(crate) font: Option<Font<'f>>,
    pub(crate) cursor_x: i16,
    pub(crate) cursor_y: i16,
    pub(crate) style: TextStyle,
}

/// Nominal glyph cell when no font is selected yet.
const FALLBACK_CELL: (i16, i16) = (5, 7);

impl<'f> TextState<'f> {
    pub(crate) fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C, text: &str, color: Color) {
        let Some(font) = self.font else {
            return;
        };
        let scale = self.style.scale.max(1) as i16;
        for ch in text.chars() {
            if ch == '\n' {
                self.cursor_x = 0;
                self.cursor_y += font.char_height() as i16 * scale + self.style.line_spacing;
                continue;
            }
            let Some(glyph) = font.glyph(ch) else {
                continue;
            };
            draw_glyph(
                canvas,
                &font,
                glyph,
                self.cursor_x + self.style.offset_x,
                self.cursor_y + self.style.offset_y,
                scale,
                color,
            );
            self.cursor_x += glyph.width as i16 * scale + self.style.letter_spacing;
        }
    }

    /// Widest line's layout advance in pixels.
    pub(crate) fn measure(&self, text: &str) -> u16 {
        let Some(font) = self.font else {
            return 0;
        };
        let scale = self.style.scale.max(1) as i32;
        let spacing = self.style.letter_spacing as i32;
        let mut widest = 0i32;
        let mut line = 0i32;
        let mut glyphs_on_line = 0u32;
        for ch in text.chars() {
            if ch == '\n' {
                widest = widest.max(line);
                line = 0;
                glyphs_on_line = 0;
                continue;
            }
            let Some(glyph) = font.glyph(ch) else {
                continue;
            };
            if glyphs_on_line > 0 {
                line += spacing;
            }
            line += glyph.width as i32 * scale;
            glyphs_on_line += 1;
        }
        widest.max(line).clamp(0, u16::MAX as i32) as u16
    }

    /// Character-cell advance: nominal glyph width and row height, scaled
    /// and spaced.
    pub(crate) fn cell(&self) -> (i16, i16) {
        let scale = self.style.scale.max(1) as i16;
        let (w, h) = self.font.map_or(FALLBACK_CELL, |f| {
            (f.nominal_width() as i16, f.char_height() as i16)
        });
        (
            w * scale + self.style.letter_spacing,
            h * scale + self.style.line_spacing,
        )
    }
}

fn draw_glyph<C: Canvas + ?Sized>(
    canvas: &mut C,
    font: &Font<'_>,
    glyph: Glyph,
    x: i16,
    y: i16,
    scale: i16,
    color: Color,
) {
    let row_bytes = (glyph.width as usize + 7) >> 3;
    for row in 0..font.char_height() as usize {
        for byte_index in 0..row_bytes {
            let bits = font.bitmap_byte(glyph.offset + row * row_bytes + byte_index);
            let columns = (glyph.width as usize - byte_index * 8).min(8);
            for bit in 0..columns {
                if bits >> bit & 1 == 0 {
                    continue;
                }
                let px = x + (byte_index * 8 + bit) as i16 * scale;
                let py = y + row as i16 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        canvas.draw_pixel(px + dx, py + dy, color);
                    }
                }
            }
        }
    }
}

/// Text operations over any [`Canvas`] that carries a [`TextState`].
pub trait TextRender<'f>: Canvas {
    fn text_state(&self) -> &TextState<'f>;

    fn text_state_mut(&mut self) -> &mut TextState<'f>;

    /// Select the glyph table used by subsequent text operations.
    fn set_font(&mut self, table: &'f [u8]) {
        self.text_state_mut().font = Some(Font::new(table));
    }

    /// Draw a string at the cursor with an explicit color, advancing the
    /// cursor past it.
    fn draw_text(&mut self, text: &str, color: Color) {
        let mut state = *self.text_state();
        state.draw(self, text, color);
        *self.text_state_mut() = state;
    }

    /// Draw a string in the configured text color.
    fn write_text(&mut self, text: &str) {
        let color = self.text_state().style.color;
        self.draw_text(text, color);
    }

    /// Layout width of `text` in pixels (widest line for multi-line input).
    fn text_width(&self, text: &str) -> u16 {
        self.text_state().measure(text)
    }

    /// Place the cursor at a character cell.
    fn set_cursor(&mut self, column: u8, row: u8) {
        let (cw, ch) = self.text_state().cell();
        let state = self.text_state_mut();
        state.cursor_x = column as i16 * cw;
        state.cursor_y = row as i16 * ch;
    }

    /// Place the cursor at a pixel coordinate.
    fn set_cursor_coord(&mut self, x: i16, y: i16) {
        let state = self.text_state_mut();
        state.cursor_x = x;
        state.cursor_y = y;
    }

    fn set_cursor_column(&mut self, column: u8) {
        let (cw, _) = self.text_state().cell();
        self.text_state_mut().cursor_x = column as i16 * cw;
    }

    fn set_cursor_row(&mut self, row: u8) {
        let (_, ch) = self.text_state().cell();
        self.text_state_mut().cursor_y = row as i16 * ch;
    }

    /// Move the cursor down `rows` character rows and to `column`.
    fn advance_cursor_row(&mut self, rows: u8, column: u8) {
        let (cw, ch) = self.text_state().cell();
        let state = self.text_state_mut();
        state.cursor_y += rows as i16 * ch;
        state.cursor_x = column as i16 * cw;
    }

    fn cursor(&self) -> (i16, i16) {
        let state = self.text_state();
        (state.cursor_x, state.cursor_y)
    }

    fn set_text_style(&mut self, style: TextStyle) {
        self.text_state_mut().style = style;
    }

    fn text_style(&self) -> TextStyle {
        self.text_state().style
    }

    fn set_letter_spacing(&mut self, spacing: i16) {
        self.text_state_mut().style.letter_spacing = spacing;
    }

    fn set_line_spacing(&mut self, spacing: i16) {
        self.text_state_mut().style.line_spacing = spacing;
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_state_mut().style.color = color;
    }

    fn set_text_scale(&mut self, scale: u8) {
        self.text_state_mut().style.scale = scale;
    }

    fn set_text_offset(&mut self, x: i16, y: i16) {
        let state = self.text_state_mut();
        state.style.offset_x = x;
        state.style.offset_y = y;
    }
}
