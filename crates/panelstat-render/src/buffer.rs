use bytes::{BufMut, Bytes, BytesMut};

use crate::color::Rgb565;

/// An owned, fixed-dimension grid of RGB565 pixels.
///
/// Dimensions are set at construction and never change. All writes are
/// bounds-checked and out-of-range coordinates are ignored — callers
/// routinely compute coordinates at or past the buffer edge when drawing
/// glyph spacing columns and clipped text.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
}

impl PixelBuffer {
    /// Create a buffer of the given dimensions, filled with black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Size of the serialized buffer in bytes (2 per pixel).
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * 2
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Write one pixel. Out-of-range coordinates are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = color;
    }

    /// Read one pixel, or `None` outside the buffer.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }

    /// Fill a rectangle, clipped to the buffer. Non-positive `w` or `h` is a
    /// no-op.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        for yy in y0..y1 {
            let row = yy as usize * self.width;
            for xx in x0..x1 {
                self.pixels[row + xx as usize] = color;
            }
        }
    }

    /// Serialize to raw wire bytes: little-endian RGB565, row-major, no
    /// padding between rows.
    ///
    /// This is the single point where colors leave native form.
    pub fn to_wire_bytes(&self) -> Bytes {
        let mut out = BytesMut::with_capacity(self.byte_len());
        for px in &self.pixels {
            out.put_u16_le(px.raw());
        }
        out.freeze()
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
