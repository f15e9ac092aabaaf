//! Text drawing on a [`PixelBuffer`] using the fixed 5×7 font.

use crate::buffer::PixelBuffer;
use crate::color::Rgb565;
use crate::font::{self, CHAR_ADVANCE, GLYPH_COLUMNS, GLYPH_ROWS};

const BLANK: [u8; GLYPH_COLUMNS] = [0; GLYPH_COLUMNS];

impl PixelBuffer {
    /// Draw one character with its top-left corner at `(x, y)`.
    ///
    /// Each logical font pixel becomes a `scale × scale` block. A spacing
    /// column of width `scale` is painted in `bg` to the right of the glyph.
    /// Characters outside the font render as a blank cell of `bg`.
    pub fn draw_char(&mut self, x: i32, y: i32, ch: char, scale: i32, fg: Rgb565, bg: Rgb565) {
        if scale <= 0 {
            return;
        }
        let columns = font::glyph(ch).unwrap_or(&BLANK);
        for (col, bits) in columns.iter().enumerate() {
            for row in 0..GLYPH_ROWS {
                let on = (bits >> row) & 0x1 != 0;
                self.fill_rect(
                    x + col as i32 * scale,
                    y + row as i32 * scale,
                    scale,
                    scale,
                    if on { fg } else { bg },
                );
            }
        }
        // Spacing column
        self.fill_rect(
            x + GLYPH_COLUMNS as i32 * scale,
            y,
            scale,
            GLYPH_ROWS as i32 * scale,
            bg,
        );
    }

    /// Draw a string left to right, advancing `6 × scale` pixels per
    /// character. Returns the cursor x position after the last character.
    ///
    /// There is no wrapping; text past the right edge clips pixel by pixel.
    pub fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        scale: i32,
        fg: Rgb565,
        bg: Rgb565,
    ) -> i32 {
        let mut cursor = x;
        for ch in text.chars() {
            self.draw_char(cursor, y, ch, scale, fg, bg);
            cursor += CHAR_ADVANCE as i32 * scale;
        }
        cursor
    }
}
