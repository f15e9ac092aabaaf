//! 90° buffer rotation.
//!
//! Used when content is authored in a portrait working buffer but the
//! physical panel scans out landscape (or vice versa). The destination must
//! have transposed dimensions; in release builds a mismatched destination
//! receives whatever clips in bounds rather than failing.

use crate::buffer::PixelBuffer;

/// Rotate `src` a quarter turn clockwise into `dst`.
///
/// Maps source `(x, y)` to destination `(dst_width − 1 − y, x)`. Requires
/// `dst.width() == src.height()` and `dst.height() == src.width()`.
pub fn rotate_90cw(src: &PixelBuffer, dst: &mut PixelBuffer) {
    debug_assert_eq!(dst.width(), src.height());
    debug_assert_eq!(dst.height(), src.width());
    let dst_w = dst.width() as i32;
    for y in 0..src.height() as i32 {
        for x in 0..src.width() as i32 {
            if let Some(px) = src.get_pixel(x, y) {
                dst.put_pixel(dst_w - 1 - y, x, px);
            }
        }
    }
}

/// Rotate `src` a quarter turn counter-clockwise into `dst`; the inverse of
/// [`rotate_90cw`].
///
/// Maps source `(x, y)` to destination `(y, dst_height − 1 − x)`. Requires
/// `dst.width() == src.height()` and `dst.height() == src.width()`.
pub fn rotate_90ccw(src: &PixelBuffer, dst: &mut PixelBuffer) {
    debug_assert_eq!(dst.width(), src.height());
    debug_assert_eq!(dst.height(), src.width());
    let dst_h = dst.height() as i32;
    for y in 0..src.height() as i32 {
        for x in 0..src.width() as i32 {
            if let Some(px) = src.get_pixel(x, y) {
                dst.put_pixel(y, dst_h - 1 - x, px);
            }
        }
    }
}
