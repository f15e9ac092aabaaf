//! Horizontal percentage gauges.

use crate::buffer::PixelBuffer;
use crate::color::Rgb565;

impl PixelBuffer {
    /// Draw a horizontal utilization bar.
    ///
    /// `percent` is clamped to 100. The background is painted first, then a
    /// foreground fill of width `round(percent/100 × w)`, then a one-pixel
    /// border in `frame`. Non-positive extents are a no-op.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_bar(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        percent: u32,
        fg: Rgb565,
        bg: Rgb565,
        frame: Rgb565,
    ) {
        if w <= 0 || h <= 0 {
            return;
        }
        let pct = percent.min(100) as i64;
        let fill = ((pct * w as i64 + 50) / 100) as i32;

        self.fill_rect(x, y, w, h, bg);
        self.fill_rect(x, y, fill, h, fg);

        for xx in x..x + w {
            self.put_pixel(xx, y, frame);
            self.put_pixel(xx, y + h - 1, frame);
        }
        for yy in y..y + h {
            self.put_pixel(x, yy, frame);
            self.put_pixel(x + w - 1, yy, frame);
        }
    }
}
