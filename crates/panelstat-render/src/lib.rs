//! Fixed-size RGB565 framebuffer rendering for small external panels.
//!
//! Everything here is infallible by design: out-of-range coordinates clip,
//! unsupported characters render as blank cells, and percentages clamp. A
//! glitched frame on a status display is preferable to aborting the loop
//! that produces it.
//!
//! A buffer is created per render pass, painted, serialized once with
//! [`PixelBuffer::to_wire_bytes`], and discarded.

pub mod buffer;
pub mod color;
pub mod font;
pub mod gauge;
pub mod rotate;
pub mod text;

pub use buffer::PixelBuffer;
pub use color::{parse_hex_color, Rgb565};
pub use font::{glyph, CHAR_ADVANCE, GLYPH_COLUMNS, GLYPH_ROWS};
pub use rotate::{rotate_90ccw, rotate_90cw};
