//! Color constants for the dial and picker.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to many embedded displays (including ST7789) and requires
//! no conversion when writing to the display buffer.
//!
//! Attribute colors are written as 8-bit-per-channel hex (`#RRGGBB`) and are
//! converted with [`rgb565_from_hex`].

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Label text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Default dial stroke color, error log lines.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Default hour pointer color, info log lines.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue. Default minute pointer color.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow. Warning log lines.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Dark gray for unselected label values and debug log lines.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Convert a packed `0xRRGGBB` value to RGB565.
///
/// Any alpha byte above the low 24 bits is ignored.
#[inline]
pub fn rgb565_from_hex(rgb: u32) -> Rgb565 {
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Rgb565::from(Rgb888::new(r, g, b))
}
